//! The three per-concern caches, built once and shared by handle.

use std::sync::Arc;

use serde::Serialize;

use super::clock::{Clock, SystemClock};
use super::config::CacheConfig;
use super::ttl::{CacheStats, TtlCache};
use crate::model::{Interview, Job, MatchResult};
use crate::similarity::SimilarityResult;

pub const MATCH_CACHE_NAME: &str = "match_results";
pub const SIMILARITY_CACHE_NAME: &str = "skill_similarity";
pub const ENTITY_CACHE_NAME: &str = "entities";

/// Value held by the entity-lookup cache.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityRecord {
    Job(Job),
    /// `None` records that the candidate has no interview.
    Interview(Option<Interview>),
}

/// Match-result, skill-similarity and entity caches with independent TTLs.
#[derive(Debug)]
pub struct MatchCaches {
    pub results: TtlCache<String, MatchResult>,
    pub similarity: TtlCache<String, SimilarityResult>,
    pub entities: TtlCache<String, EntityRecord>,
    similarity_key_skills: usize,
}

/// Occupancy of every cache in a [`MatchCaches`].
#[derive(Debug, Clone, Serialize)]
pub struct CacheOccupancy {
    pub results: CacheStats,
    pub similarity: CacheStats,
    pub entities: CacheStats,
}

impl MatchCaches {
    /// Caches on the system clock.
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Builds all caches on a shared `clock`.
    pub fn with_clock(config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            results: TtlCache::with_clock(
                MATCH_CACHE_NAME,
                config.match_ttl,
                config.sweep_interval,
                Arc::clone(&clock),
            ),
            similarity: TtlCache::with_clock(
                SIMILARITY_CACHE_NAME,
                config.similarity_ttl,
                config.sweep_interval,
                Arc::clone(&clock),
            ),
            entities: TtlCache::with_clock(
                ENTITY_CACHE_NAME,
                config.entity_ttl,
                config.sweep_interval,
                clock,
            ),
            similarity_key_skills: config.similarity_key_skills,
        }
    }

    /// Candidate skill tokens used when deriving a similarity key.
    #[inline]
    pub fn similarity_key_skills(&self) -> usize {
        self.similarity_key_skills
    }

    /// Empties all three caches.
    pub fn clear_all(&self) {
        self.results.clear();
        self.similarity.clear();
        self.entities.clear();
    }

    /// Entry counts and counters per cache.
    pub fn occupancy(&self) -> CacheOccupancy {
        CacheOccupancy {
            results: self.results.stats(),
            similarity: self.similarity.stats(),
            entities: self.entities.stats(),
        }
    }
}

impl Default for MatchCaches {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
