use std::sync::Arc;

use tracing::{debug, instrument};

use crate::cache::MatchCaches;
use crate::constants::NO_SKILLS_REQUIRED_SCORE;
use crate::diagnostics::Diagnostics;
use crate::model::{Interview, SkillAlgorithm, normalize_token};
use crate::similarity::SimilarityService;

use super::legacy::{legacy_keyword, legacy_score};
use super::types::{NO_INTERVIEW_DETAIL, NO_SKILLS_REQUIRED_DETAIL, SkillScore, Unavailable};
use super::verified::verified_overlap;

/// One way of scoring required skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    ExternalSimilarity,
    VerifiedOverlap,
    LegacyKeyword,
}

impl Strategy {
    /// Tried in this order; the first that yields a score wins.
    pub const DEFAULT_ORDER: [Strategy; 3] = [
        Strategy::ExternalSimilarity,
        Strategy::VerifiedOverlap,
        Strategy::LegacyKeyword,
    ];

    /// Algorithm reported when this strategy succeeds.
    pub fn algorithm(&self) -> SkillAlgorithm {
        match self {
            Strategy::ExternalSimilarity => SkillAlgorithm::ExternalSimilarity,
            Strategy::VerifiedOverlap => SkillAlgorithm::VerifiedOverlap,
            Strategy::LegacyKeyword => SkillAlgorithm::LegacyKeyword,
        }
    }
}

/// Drives the skill strategies in order. Never fails.
pub struct SkillScorer<S> {
    pub(crate) service: S,
    pub(crate) caches: Arc<MatchCaches>,
    pub(crate) diagnostics: Arc<Diagnostics>,
    strategies: Vec<Strategy>,
}

impl<S> std::fmt::Debug for SkillScorer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillScorer")
            .field("strategies", &self.strategies)
            .finish_non_exhaustive()
    }
}

impl<S: SimilarityService> SkillScorer<S> {
    /// Scorer running [`Strategy::DEFAULT_ORDER`].
    pub fn new(service: S, caches: Arc<MatchCaches>, diagnostics: Arc<Diagnostics>) -> Self {
        Self {
            service,
            caches,
            diagnostics,
            strategies: Strategy::DEFAULT_ORDER.to_vec(),
        }
    }

    /// Replaces the strategy order. Legacy overlap still runs if every listed one is unavailable.
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Strategies in the order they are tried.
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// The similarity backend.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Scores `required` skill tokens against `interview`.
    ///
    /// Blank tokens are dropped. No required skills scores 80; no interview scores 0
    /// with `algorithm: None`.
    #[instrument(level = "debug", skip_all, fields(required = required.len()))]
    pub async fn score_skills(&self, required: &[String], interview: Option<&Interview>) -> SkillScore {
        let required: Vec<String> = required
            .iter()
            .map(|s| normalize_token(s))
            .filter(|s| !s.is_empty())
            .collect();

        if required.is_empty() {
            return SkillScore {
                score: NO_SKILLS_REQUIRED_SCORE,
                matched: 0,
                total: 0,
                details: vec![NO_SKILLS_REQUIRED_DETAIL.to_string()],
                algorithm: Some(SkillAlgorithm::NoRequirements),
            };
        }

        let Some(interview) = interview else {
            return SkillScore {
                score: 0,
                matched: 0,
                total: required.len(),
                details: vec![NO_INTERVIEW_DETAIL.to_string()],
                algorithm: None,
            };
        };

        for strategy in &self.strategies {
            match self.run(*strategy, &required, interview).await {
                Ok(score) => return score,
                Err(reason) => {
                    debug!(strategy = ?strategy, %reason, "skill strategy unavailable")
                }
            }
        }
        legacy_score(&required, interview)
    }

    async fn run(
        &self,
        strategy: Strategy,
        required: &[String],
        interview: &Interview,
    ) -> Result<SkillScore, Unavailable> {
        match strategy {
            Strategy::ExternalSimilarity => self.external_similarity(required, interview).await,
            Strategy::VerifiedOverlap => verified_overlap(required, interview),
            Strategy::LegacyKeyword => legacy_keyword(required, interview),
        }
    }
}
