use crate::constants::{DIRECT_MATCH_BONUS, SYNONYM_MATCH_FACTOR};
use crate::model::{EnhancedSkills, Interview, SkillAlgorithm};

use super::types::{SkillScore, Tally, Unavailable, round_score};

/// Scores required skills against interview-verified skills.
///
/// Direct hit: `min(100, score + 10)`. Synonym hit: `round(score * 0.9)`. Applies
/// whenever the interview carries an enhanced-skills record, even an empty one.
pub fn verified_overlap(
    required: &[String],
    interview: &Interview,
) -> Result<SkillScore, Unavailable> {
    let enhanced = interview
        .enhanced_skills
        .as_ref()
        .ok_or(Unavailable::NoEnhancedSkills)?;
    Ok(score_against(required, enhanced))
}

/// Overlap of `required` against verified skills, with no interview lookup.
pub(crate) fn score_against(required: &[String], enhanced: &EnhancedSkills) -> SkillScore {
    let mut tally = Tally::with_capacity(required.len());

    for token in required {
        let verified = &enhanced.verified_skills;
        if let Some(skill) = verified.iter().find(|s| s.matches_directly(token)) {
            let score = round_score(skill.proficiency() + DIRECT_MATCH_BONUS);
            tally.hit(
                score,
                format!("{token}: {score}/100 ({} - exact match)", skill.display_name),
            );
        } else if let Some(skill) = verified.iter().find(|s| s.matches_synonym(token)) {
            let score = round_score(skill.proficiency() * SYNONYM_MATCH_FACTOR);
            tally.hit(
                score,
                format!("{token}: {score}/100 ({} via synonym)", skill.display_name),
            );
        } else {
            tally.miss(token);
        }
    }

    tally.finish(required.len(), SkillAlgorithm::VerifiedOverlap)
}
