use tracing::{debug, warn};

use crate::cache::similarity_key;
use crate::model::{Interview, SkillAlgorithm};
use crate::similarity::{SimilarityResult, SimilarityService};

use super::chain::SkillScorer;
use super::types::{SkillScore, Tally, Unavailable, round_score};

/// Maps a service result onto the required skills.
///
/// Each required skill scores `round(similarity * 100)`; skills the service did
/// not return score 0. Exact, strong and moderate tiers count as matched.
pub fn score_from_similarity(required: &[String], result: &SimilarityResult) -> SkillScore {
    let mut tally = Tally::with_capacity(required.len());

    for token in required {
        let Some(found) = result.match_for(token) else {
            tally.miss(token);
            continue;
        };
        let score = round_score(found.similarity_score * 100.0);
        let held = found.candidate_skill.as_deref().unwrap_or("-");
        let detail = format!(
            "{token}: {score}/100 ({held} - {} match)",
            found.match_strength.as_str()
        );

        if found.match_strength.counts_as_match() {
            tally.hit(score, detail);
        } else if score > 0 {
            tally.partial(score, detail);
        } else {
            tally.miss(token);
        }
    }

    tally.finish(required.len(), SkillAlgorithm::ExternalSimilarity)
}

impl<S: SimilarityService> SkillScorer<S> {
    /// Asks the similarity service, through the similarity cache.
    ///
    /// Requires at least one verified skill. Any service error is returned as
    /// [`Unavailable::Service`]; there is no retry.
    pub(crate) async fn external_similarity(
        &self,
        required: &[String],
        interview: &Interview,
    ) -> Result<SkillScore, Unavailable> {
        let enhanced = interview
            .enhanced_skills
            .as_ref()
            .filter(|skills| skills.has_verified_skills())
            .ok_or(Unavailable::NoVerifiedSkills)?;

        let key = similarity_key(required, enhanced, self.caches.similarity_key_skills());
        if let Some(result) = self.caches.similarity.get(&key) {
            self.diagnostics.record_similarity_cache_hit();
            debug!(interview_id = %interview.id, "similarity cache hit");
            return Ok(score_from_similarity(required, &result));
        }

        let outcome = self
            .service
            .skill_similarity(required, enhanced)
            .await
            .and_then(|result| result.validate().map(|()| result));

        match outcome {
            Ok(result) => {
                self.diagnostics.record_external_call();
                let score = score_from_similarity(required, &result);
                self.caches.similarity.set(key, result);
                Ok(score)
            }
            Err(err) => {
                if err.is_failure() {
                    self.diagnostics.record_external_call();
                    self.diagnostics.record_external_failure();
                    warn!(
                        interview_id = %interview.id,
                        error = %err,
                        "similarity service failed; falling back to local overlap"
                    );
                }
                Err(err.into())
            }
        }
    }
}
