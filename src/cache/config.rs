use std::time::Duration;

use crate::constants::{
    DEFAULT_ENTITY_TTL, DEFAULT_MATCH_TTL, DEFAULT_SIMILARITY_KEY_SKILLS, DEFAULT_SIMILARITY_TTL,
    DEFAULT_SWEEP_INTERVAL,
};

/// Lifetimes and sweep cadence for [`MatchCaches`](super::MatchCaches).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub match_ttl: Duration,
    pub similarity_ttl: Duration,
    pub entity_ttl: Duration,
    /// Every this many inserts, a cache sweeps out expired entries.
    pub sweep_interval: u64,
    /// Candidate skill tokens hashed into a similarity key.
    pub similarity_key_skills: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            match_ttl: DEFAULT_MATCH_TTL,
            similarity_ttl: DEFAULT_SIMILARITY_TTL,
            entity_ttl: DEFAULT_ENTITY_TTL,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            similarity_key_skills: DEFAULT_SIMILARITY_KEY_SKILLS,
        }
    }
}

impl CacheConfig {
    /// Lifetime of match results.
    pub fn match_ttl(mut self, ttl: Duration) -> Self {
        self.match_ttl = ttl;
        self
    }

    /// Lifetime of similarity results.
    pub fn similarity_ttl(mut self, ttl: Duration) -> Self {
        self.similarity_ttl = ttl;
        self
    }

    /// Lifetime of job and interview lookups.
    pub fn entity_ttl(mut self, ttl: Duration) -> Self {
        self.entity_ttl = ttl;
        self
    }

    /// Inserts between full sweeps.
    pub fn sweep_interval(mut self, interval: u64) -> Self {
        self.sweep_interval = interval;
        self
    }

    /// Candidate skills that feed the similarity key.
    pub fn similarity_key_skills(mut self, count: usize) -> Self {
        self.similarity_key_skills = count;
        self
    }
}
