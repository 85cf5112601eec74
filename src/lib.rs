//! TalentMatch library crate (used by the CLI and integration tests).
//!
//! Scores how well candidates fit a job. Each (job, candidate) pair gets a
//! 0-100 score split 65/25/10 across role, skills and experience:
//!
//! - [`roles`]: free-text role to canonical code, plus the directional
//!   compatibility lookup that gates every pair.
//! - [`skills`]: ordered skill strategies (external similarity service, local
//!   verified-skill overlap, legacy keywords); first available wins.
//! - [`scoring`]: the [`Aggregator`] combining the three parts.
//! - [`cache`]: per-concern TTL caches with an injectable [`Clock`].
//! - [`engine`] and [`batch`]: cached pair evaluation and chunked pool matching.
//!
//! ## Test/Mock Support
//! [`similarity::MockSimilarityService`] is available behind
//! `#[cfg(any(test, feature = "mock"))]`.

pub mod batch;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod engine;
pub mod hashing;
pub mod model;
pub mod records;
pub mod roles;
pub mod scoring;
pub mod similarity;
pub mod skills;

pub use batch::{BatchConfig, BatchController, rank_matches};
pub use cache::{CacheConfig, Clock, ManualClock, MatchCaches, SystemClock, TtlCache};
pub use config::{Config, ConfigError};
pub use diagnostics::{Diagnostics, DiagnosticsSnapshot};
pub use engine::{MatchEngine, MatchEngineHandle};
pub use model::{
    Candidate, CompatibilityLevel, EnhancedSkills, Interview, Job, MatchBreakdown, MatchResult,
    SkillAlgorithm, SkillCategory, VerifiedSkill, WorkMode,
};
pub use records::{CachedRecords, InMemoryRecords, MatchRun, RecordError, RecordSource};
pub use roles::{RoleCode, RoleMatch};
pub use scoring::Aggregator;
#[cfg(any(test, feature = "mock"))]
pub use similarity::MockSimilarityService;
pub use similarity::{
    DisabledSimilarity, HttpSimilarityClient, SimilarityError, SimilarityService, Throttled,
};
pub use skills::{SkillScore, SkillScorer, Strategy, Unavailable};
