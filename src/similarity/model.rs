use serde::{Deserialize, Serialize};

use super::error::SimilarityError;
use crate::constants::MAX_SCORE;
use crate::model::{EnhancedSkills, normalize_token};

pub const EXACT_MATCH_THRESHOLD: f64 = 0.95;
pub const STRONG_MATCH_THRESHOLD: f64 = 0.80;
pub const MODERATE_MATCH_THRESHOLD: f64 = 0.65;
pub const WEAK_MATCH_THRESHOLD: f64 = 0.45;

/// Tier of a similarity score. The service sends `no_match` for the lowest tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrength {
    Exact,
    Strong,
    Moderate,
    Weak,
    #[serde(alias = "no_match")]
    None,
}

impl MatchStrength {
    /// Tier for a similarity in `[0, 1]`.
    pub fn classify(similarity: f64) -> Self {
        if similarity >= EXACT_MATCH_THRESHOLD {
            MatchStrength::Exact
        } else if similarity >= STRONG_MATCH_THRESHOLD {
            MatchStrength::Strong
        } else if similarity >= MODERATE_MATCH_THRESHOLD {
            MatchStrength::Moderate
        } else if similarity >= WEAK_MATCH_THRESHOLD {
            MatchStrength::Weak
        } else {
            MatchStrength::None
        }
    }

    /// Tiers that count as a matched skill (moderate or better).
    #[inline]
    pub fn counts_as_match(&self) -> bool {
        matches!(
            self,
            MatchStrength::Exact | MatchStrength::Strong | MatchStrength::Moderate
        )
    }

    /// Wire name of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrength::Exact => "exact",
            MatchStrength::Strong => "strong",
            MatchStrength::Moderate => "moderate",
            MatchStrength::Weak => "weak",
            MatchStrength::None => "none",
        }
    }
}

/// Request body sent to the similarity endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityRequest<'a> {
    pub job_skills: &'a [String],
    pub candidate_enhanced_skills: &'a EnhancedSkills,
}

/// Best candidate skill for one job skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub job_skill: String,
    #[serde(default)]
    pub candidate_skill: Option<String>,
    pub similarity_score: f64,
    pub match_strength: MatchStrength,
}

/// Per-skill similarity of a job against one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub overall_score: f64,
    #[serde(default)]
    pub matches: Vec<SkillMatch>,
    #[serde(default)]
    pub strong_matches: u32,
    #[serde(default)]
    pub moderate_matches: u32,
    #[serde(default)]
    pub weak_matches: u32,
    #[serde(default)]
    pub coverage: f64,
    #[serde(default)]
    pub job_skills_count: u32,
}

impl SimilarityResult {
    /// Rejects payloads whose numbers fall outside the documented ranges.
    pub fn validate(&self) -> Result<(), SimilarityError> {
        if !self.overall_score.is_finite()
            || !(0.0..=MAX_SCORE as f64).contains(&self.overall_score)
        {
            return Err(SimilarityError::Malformed {
                reason: format!("overall_score out of range: {}", self.overall_score),
            });
        }

        if let Some(bad) = self
            .matches
            .iter()
            .find(|m| !m.similarity_score.is_finite() || !(0.0..=1.0).contains(&m.similarity_score))
        {
            return Err(SimilarityError::Malformed {
                reason: format!(
                    "similarity_score out of range for '{}': {}",
                    bad.job_skill, bad.similarity_score
                ),
            });
        }

        Ok(())
    }

    /// Finds the match entry for a job skill, comparing normalized tokens.
    pub fn match_for(&self, job_skill: &str) -> Option<&SkillMatch> {
        let wanted = normalize_token(job_skill);
        self.matches
            .iter()
            .find(|m| normalize_token(&m.job_skill) == wanted)
    }
}

/// Envelope returned by the similarity endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SimilarityResponse {
    pub success: bool,
    #[serde(default)]
    pub similarity_result: Option<SimilarityResult>,
}

impl SimilarityResponse {
    /// Unwraps a successful, well-formed result.
    pub fn into_result(self) -> Result<SimilarityResult, SimilarityError> {
        if !self.success {
            return Err(SimilarityError::Unsuccessful);
        }
        let result = self.similarity_result.ok_or_else(|| SimilarityError::Malformed {
            reason: "missing similarity_result".to_string(),
        })?;
        result.validate()?;
        Ok(result)
    }
}
