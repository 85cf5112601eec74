//! Cross-cutting, shared constants.
//!
//! # Weight Invariants
//!
//! The 65/25/10 split between role, skill and experience points is part of the
//! algorithm, not a tunable default. Changing any of [`ROLE_EXACT_POINTS`],
//! [`SKILL_WEIGHT`] or [`EXPERIENCE_WEIGHT`] changes every score the engine has ever
//! produced, so they are compile-time constants and not exposed through
//! [`Config`](crate::config::Config).

use std::time::Duration;

pub const MAX_SCORE: u32 = 100;

pub const ROLE_EXACT_POINTS: u32 = 65;
pub const ROLE_COMPATIBLE_POINTS: u32 = 50;
pub const SKILL_WEIGHT: u32 = 25;
pub const EXPERIENCE_WEIGHT: u32 = 10;

/// Experience points when the candidate has at least half of the required years.
pub const EXPERIENCE_PARTIAL_POINTS: u32 = 6;
/// Floor for experience points below the half-way mark.
pub const EXPERIENCE_FLOOR_POINTS: u32 = 2;

/// Skill score reported when a job lists no required skills.
pub const NO_SKILLS_REQUIRED_SCORE: u32 = 80;

pub const DIRECT_MATCH_BONUS: f64 = 10.0;
pub const SYNONYM_MATCH_FACTOR: f64 = 0.9;

pub const KEYWORD_MATCH_SCORE: u32 = 90;
pub const IMPROVEMENT_AREA_SCORE: u32 = 65;
pub const COMPETENCY_FACTOR: f64 = 0.6;

/// Number of per-skill detail lines copied into a match result.
pub const MATCH_DETAIL_SKILL_LIMIT: usize = 3;

pub const DEFAULT_MATCH_TTL: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_SIMILARITY_TTL: Duration = Duration::from_secs(15 * 60);
pub const DEFAULT_ENTITY_TTL: Duration = Duration::from_secs(10 * 60);

/// Every Nth insertion into a TTL cache triggers a full expiry sweep.
pub const DEFAULT_SWEEP_INTERVAL: u64 = 50;

/// Candidate skills beyond this prefix are ignored when deriving a similarity key.
pub const DEFAULT_SIMILARITY_KEY_SKILLS: usize = 10;

pub const DEFAULT_BATCH_SIZE: usize = 50;
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_millis(100);

/// Size of a job's shortlist.
pub const SHORTLIST_LIMIT: usize = 10;
/// Lowest score a job recommendation may carry.
pub const RECOMMENDATION_MIN_SCORE: u32 = 25;
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 20;

pub const DEFAULT_SIMILARITY_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_SIMILARITY_MAX_IN_FLIGHT: usize = 16;

/// Path of the skill-similarity endpoint, relative to the configured base URL.
pub const SIMILARITY_ENDPOINT_PATH: &str = "/ml/skill-similarity";
