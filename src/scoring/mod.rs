//! Score aggregation for one (job, candidate) pair.
//!
//! The final score is `role + skill + experience`, weighted 65/25/10 and clamped to
//! `[0, 100]`:
//!
//! - role: 65 for an exact role code, 50 for a compatible one. An incompatible or
//!   missing candidate role gates the pair to 0 before anything else runs.
//! - skill: `round(skill_score / 100 * 25)` where `skill_score` comes from the
//!   [`crate::skills`] chain.
//! - experience: see [`experience_points`].

pub mod aggregator;
pub mod points;

#[cfg(test)]
mod tests;

pub use aggregator::{Aggregator, NO_ROLE_DATA_DETAIL};
pub use points::{experience_points, skill_points};
