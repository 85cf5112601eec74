//! Records consumed and produced by the matching core.
//!
//! Jobs, candidates and interviews arrive fully materialized from a storage layer
//! outside this crate (see [`crate::records`]). [`MatchResult`] is the only record
//! the core produces.

pub mod interview;
pub mod job;
pub mod result;

#[cfg(test)]
mod tests;

pub use interview::{EnhancedSkills, Interview, SkillCategory, VerifiedSkill};
pub use job::{Candidate, Job, WorkMode};
pub use result::{CompatibilityLevel, MatchBreakdown, MatchResult, SkillAlgorithm};

/// Lower-cases and trims a skill token.
#[inline]
pub fn normalize_token(token: &str) -> String {
    token.trim().to_lowercase()
}
