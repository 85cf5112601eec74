use serde::Serialize;
use thiserror::Error;

use crate::model::SkillAlgorithm;
use crate::similarity::SimilarityError;

/// Detail line for a required skill nothing matched.
pub const NO_MATCH_DETAIL: &str = "No match found";
pub const NO_SKILLS_REQUIRED_DETAIL: &str = "No specific skills required";
pub const NO_INTERVIEW_DETAIL: &str = "No interview data";

/// Output of one skill strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillScore {
    /// Average per-skill score in `[0, 100]`.
    pub score: u32,
    pub matched: usize,
    pub total: usize,
    /// One line per required skill, in required order.
    pub details: Vec<String>,
    /// `None` when no strategy ran (no interview).
    pub algorithm: Option<SkillAlgorithm>,
}

/// Why a strategy could not produce a [`SkillScore`].
///
/// Never leaves the chain; the driver moves on to the next strategy.
#[derive(Debug, Error)]
pub enum Unavailable {
    #[error("interview has no enhanced skills")]
    NoEnhancedSkills,

    #[error("interview has no verified skills")]
    NoVerifiedSkills,

    #[error("similarity service unavailable: {0}")]
    Service(#[from] SimilarityError),
}

/// Rounds half-up to an integer score in `[0, 100]`.
#[inline]
pub(crate) fn round_score(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    (value.round() as u32).min(crate::constants::MAX_SCORE)
}

/// Accumulates per-skill results into a [`SkillScore`].
#[derive(Debug, Default)]
pub(crate) struct Tally {
    sum: u64,
    matched: usize,
    details: Vec<String>,
}

impl Tally {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            sum: 0,
            matched: 0,
            details: Vec::with_capacity(n),
        }
    }

    pub(crate) fn hit(&mut self, score: u32, detail: String) {
        self.sum += u64::from(score);
        self.matched += 1;
        self.details.push(detail);
    }

    /// Records a skill with a score that does not count as matched.
    pub(crate) fn partial(&mut self, score: u32, detail: String) {
        self.sum += u64::from(score);
        self.details.push(detail);
    }

    pub(crate) fn miss(&mut self, skill: &str) {
        self.details.push(format!("{skill}: {NO_MATCH_DETAIL}"));
    }

    /// Averages over `total` required skills; unmatched ones count as zero.
    pub(crate) fn finish(self, total: usize, algorithm: SkillAlgorithm) -> SkillScore {
        let score = if total == 0 {
            0
        } else {
            round_score(self.sum as f64 / total as f64)
        };
        SkillScore {
            score,
            matched: self.matched,
            total,
            details: self.details,
            algorithm: Some(algorithm),
        }
    }
}
