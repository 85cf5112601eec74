use crate::catalog::competency_for;
use crate::constants::{COMPETENCY_FACTOR, IMPROVEMENT_AREA_SCORE, KEYWORD_MATCH_SCORE};
use crate::model::{Interview, SkillAlgorithm, normalize_token};

use super::types::{SkillScore, Tally, Unavailable, round_score};

/// Equal, or either side contains the other. Blank entries never match.
fn overlaps(entry: &str, token: &str) -> bool {
    let entry = normalize_token(entry);
    !entry.is_empty() && (entry.contains(token) || token.contains(entry.as_str()))
}

/// Scores required skills against legacy interview fields. Always available.
pub fn legacy_keyword(required: &[String], interview: &Interview) -> Result<SkillScore, Unavailable> {
    Ok(legacy_score(required, interview))
}

/// Per skill, first hit wins: matching keyword (90), area for improvement (65),
/// then the skill's competency score scaled by 0.6.
pub(crate) fn legacy_score(required: &[String], interview: &Interview) -> SkillScore {
    let mut tally = Tally::with_capacity(required.len());

    for token in required {
        if let Some(keyword) = interview
            .matching_keywords
            .iter()
            .find(|k| overlaps(k, token))
        {
            tally.hit(
                KEYWORD_MATCH_SCORE,
                format!("{token}: {KEYWORD_MATCH_SCORE}/100 ({} - legacy match)", keyword.trim()),
            );
            continue;
        }

        if interview
            .areas_for_improvement
            .iter()
            .any(|area| overlaps(area, token))
        {
            tally.hit(
                IMPROVEMENT_AREA_SCORE,
                format!("{token}: {IMPROVEMENT_AREA_SCORE}/100 (area for improvement)"),
            );
            continue;
        }

        let competency = competency_for(token).and_then(|key| {
            interview
                .competency_scores
                .get(key)
                .copied()
                .filter(|v| v.is_finite() && *v > 0.0)
                .map(|value| (key, value))
        });
        match competency {
            Some((key, value)) => {
                let score = round_score(value * COMPETENCY_FACTOR);
                tally.hit(score, format!("{token}: {score}/100 ({key})"));
            }
            None => tally.miss(token),
        }
    }

    tally.finish(required.len(), SkillAlgorithm::LegacyKeyword)
}
