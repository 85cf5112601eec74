//! Skill scoring strategy chain.
//!
//! Three strategies score a job's required skills against a candidate interview,
//! tried in a fixed order with no blending:
//!
//! 1. external similarity service (needs verified skills)
//! 2. local overlap against verified skills (needs an enhanced-skills record)
//! 3. legacy keyword / improvement-area / competency overlap (always applies)
//!
//! A strategy that cannot answer returns [`Unavailable`] and the
//! [`SkillScorer`] moves on. Nothing is thrown across the chain.

pub mod chain;
pub mod external;
pub mod legacy;
pub mod types;
pub mod verified;


pub use chain::{SkillScorer, Strategy};
pub use external::score_from_similarity;
pub use legacy::legacy_keyword;
pub use types::{
    NO_INTERVIEW_DETAIL, NO_MATCH_DETAIL, NO_SKILLS_REQUIRED_DETAIL, SkillScore, Unavailable,
};
pub use verified::verified_overlap;
