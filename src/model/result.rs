use serde::{Deserialize, Serialize};

/// Which skill strategy produced a skill score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillAlgorithm {
    /// External semantic-similarity service.
    ExternalSimilarity,
    /// Local overlap against interview-verified skills.
    VerifiedOverlap,
    /// Keyword / improvement-area / competency overlap from legacy interview fields.
    LegacyKeyword,
    /// The job lists no required skills.
    NoRequirements,
}

impl SkillAlgorithm {
    /// Wire name of the algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillAlgorithm::ExternalSimilarity => "external_similarity",
            SkillAlgorithm::VerifiedOverlap => "verified_overlap",
            SkillAlgorithm::LegacyKeyword => "legacy_keyword",
            SkillAlgorithm::NoRequirements => "no_requirements",
        }
    }
}

impl std::fmt::Display for SkillAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse label for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityLevel {
    Low,
    Fair,
    Good,
    VeryGood,
    Excellent,
}

impl CompatibilityLevel {
    /// Label for a final score.
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => CompatibilityLevel::Excellent,
            65..=79 => CompatibilityLevel::VeryGood,
            50..=64 => CompatibilityLevel::Good,
            35..=49 => CompatibilityLevel::Fair,
            _ => CompatibilityLevel::Low,
        }
    }
}

/// Sub-scores that add up to the final score (before clamping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub role_score: u32,
    pub skill_score: u32,
    pub experience_score: u32,
    /// Absent when no skill strategy ran (role-gated pairs).
    pub algorithm_used: Option<SkillAlgorithm>,
}

impl MatchBreakdown {
    /// Sum of the three sub-scores.
    #[inline]
    pub fn total(&self) -> u32 {
        self.role_score + self.skill_score + self.experience_score
    }
}

/// Compatibility of one (job, candidate) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    pub candidate_id: String,
    /// Final score in `[0, 100]`.
    pub score: u32,
    pub match_details: Vec<String>,
    pub breakdown: MatchBreakdown,
    pub compatibility: CompatibilityLevel,
    pub has_interview: bool,
    pub verified: bool,
}

impl MatchResult {
    /// Returns `true` if the pair passed role gating.
    #[inline]
    pub fn is_role_compatible(&self) -> bool {
        self.breakdown.role_score > 0
    }

    /// Skill strategy that produced the skill score, if one ran.
    #[inline]
    pub fn algorithm_used(&self) -> Option<SkillAlgorithm> {
        self.breakdown.algorithm_used
    }
}
