//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `TALENTMATCH_*` environment variables.
//! A variable that is set but does not parse is an error, never a silent default.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::time::Duration;

use crate::batch::BatchConfig;
use crate::cache::CacheConfig;
use crate::constants::{
    DEFAULT_BATCH_DELAY, DEFAULT_BATCH_SIZE, DEFAULT_ENTITY_TTL, DEFAULT_MATCH_TTL,
    DEFAULT_SIMILARITY_KEY_SKILLS, DEFAULT_SIMILARITY_MAX_IN_FLIGHT, DEFAULT_SIMILARITY_TIMEOUT,
    DEFAULT_SIMILARITY_TTL, DEFAULT_SWEEP_INTERVAL,
};

/// Engine configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `TALENTMATCH_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the similarity service. `None` disables the external strategy.
    pub similarity_url: Option<String>,

    /// Per-request timeout for the similarity service. Default: 10s.
    pub similarity_timeout: Duration,

    /// Similarity calls allowed in flight at once. Default: `16`.
    pub similarity_max_in_flight: usize,

    /// Candidates evaluated concurrently per chunk. Default: `50`.
    pub batch_size: usize,

    /// Pause between chunks. Default: 100ms.
    pub batch_delay: Duration,

    /// Match-result cache TTL. Default: 5 minutes.
    pub match_ttl: Duration,

    /// Skill-similarity cache TTL. Default: 15 minutes.
    pub similarity_ttl: Duration,

    /// Entity-lookup cache TTL. Default: 10 minutes.
    pub entity_ttl: Duration,

    /// Inserts between full expiry sweeps. Default: `50`.
    pub cache_sweep_interval: u64,

    /// Candidate skills hashed into a similarity-cache key. Default: `10`.
    pub similarity_key_skills: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            similarity_url: None,
            similarity_timeout: DEFAULT_SIMILARITY_TIMEOUT,
            similarity_max_in_flight: DEFAULT_SIMILARITY_MAX_IN_FLIGHT,
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay: DEFAULT_BATCH_DELAY,
            match_ttl: DEFAULT_MATCH_TTL,
            similarity_ttl: DEFAULT_SIMILARITY_TTL,
            entity_ttl: DEFAULT_ENTITY_TTL,
            cache_sweep_interval: DEFAULT_SWEEP_INTERVAL,
            similarity_key_skills: DEFAULT_SIMILARITY_KEY_SKILLS,
        }
    }
}

impl Config {
    const ENV_SIMILARITY_URL: &'static str = "TALENTMATCH_SIMILARITY_URL";
    const ENV_SIMILARITY_TIMEOUT_MS: &'static str = "TALENTMATCH_SIMILARITY_TIMEOUT_MS";
    const ENV_SIMILARITY_MAX_IN_FLIGHT: &'static str = "TALENTMATCH_SIMILARITY_MAX_IN_FLIGHT";
    const ENV_BATCH_SIZE: &'static str = "TALENTMATCH_BATCH_SIZE";
    const ENV_BATCH_DELAY_MS: &'static str = "TALENTMATCH_BATCH_DELAY_MS";
    const ENV_MATCH_TTL_SECS: &'static str = "TALENTMATCH_MATCH_TTL_SECS";
    const ENV_SIMILARITY_TTL_SECS: &'static str = "TALENTMATCH_SIMILARITY_TTL_SECS";
    const ENV_ENTITY_TTL_SECS: &'static str = "TALENTMATCH_ENTITY_TTL_SECS";
    const ENV_CACHE_SWEEP_INTERVAL: &'static str = "TALENTMATCH_CACHE_SWEEP_INTERVAL";
    const ENV_SIMILARITY_KEY_SKILLS: &'static str = "TALENTMATCH_SIMILARITY_KEY_SKILLS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let similarity_url = Self::parse_optional_string_from_env(Self::ENV_SIMILARITY_URL);
        let similarity_timeout =
            Self::parse_millis_from_env(Self::ENV_SIMILARITY_TIMEOUT_MS, defaults.similarity_timeout)?;
        let similarity_max_in_flight = Self::parse_usize_from_env(
            Self::ENV_SIMILARITY_MAX_IN_FLIGHT,
            defaults.similarity_max_in_flight,
        )?;
        let batch_size = Self::parse_usize_from_env(Self::ENV_BATCH_SIZE, defaults.batch_size)?;
        let batch_delay = Self::parse_millis_from_env(Self::ENV_BATCH_DELAY_MS, defaults.batch_delay)?;
        let match_ttl = Self::parse_secs_from_env(Self::ENV_MATCH_TTL_SECS, defaults.match_ttl)?;
        let similarity_ttl =
            Self::parse_secs_from_env(Self::ENV_SIMILARITY_TTL_SECS, defaults.similarity_ttl)?;
        let entity_ttl = Self::parse_secs_from_env(Self::ENV_ENTITY_TTL_SECS, defaults.entity_ttl)?;
        let cache_sweep_interval =
            Self::parse_u64_from_env(Self::ENV_CACHE_SWEEP_INTERVAL, defaults.cache_sweep_interval)?;
        let similarity_key_skills = Self::parse_usize_from_env(
            Self::ENV_SIMILARITY_KEY_SKILLS,
            defaults.similarity_key_skills,
        )?;

        Ok(Self {
            similarity_url,
            similarity_timeout,
            similarity_max_in_flight,
            batch_size,
            batch_delay,
            match_ttl,
            similarity_ttl,
            entity_ttl,
            cache_sweep_interval,
            similarity_key_skills,
        })
    }

    /// Rejects zero sizes, zero TTLs and non-http similarity URLs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.similarity_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidUrl { value: url.clone() });
        }

        let positive: [(&'static str, bool); 8] = [
            (Self::ENV_SIMILARITY_TIMEOUT_MS, !self.similarity_timeout.is_zero()),
            (Self::ENV_SIMILARITY_MAX_IN_FLIGHT, self.similarity_max_in_flight > 0),
            (Self::ENV_BATCH_SIZE, self.batch_size > 0),
            (Self::ENV_MATCH_TTL_SECS, !self.match_ttl.is_zero()),
            (Self::ENV_SIMILARITY_TTL_SECS, !self.similarity_ttl.is_zero()),
            (Self::ENV_ENTITY_TTL_SECS, !self.entity_ttl.is_zero()),
            (Self::ENV_CACHE_SWEEP_INTERVAL, self.cache_sweep_interval > 0),
            (Self::ENV_SIMILARITY_KEY_SKILLS, self.similarity_key_skills > 0),
        ];
        if let Some((name, _)) = positive.into_iter().find(|(_, ok)| !ok) {
            return Err(ConfigError::MustBePositive { name });
        }

        Ok(())
    }

    /// TTLs and key settings for [`MatchCaches`](crate::cache::MatchCaches).
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            match_ttl: self.match_ttl,
            similarity_ttl: self.similarity_ttl,
            entity_ttl: self.entity_ttl,
            sweep_interval: self.cache_sweep_interval,
            similarity_key_skills: self.similarity_key_skills,
        }
    }

    /// Chunk size and delay for the batch controller.
    pub fn batch_config(&self) -> BatchConfig {
        BatchConfig::new(self.batch_size, self.batch_delay)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_u64_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                    source,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                    source,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_millis_from_env(
        var_name: &'static str,
        default: Duration,
    ) -> Result<Duration, ConfigError> {
        let fallback = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
        Self::parse_u64_from_env(var_name, fallback).map(Duration::from_millis)
    }

    fn parse_secs_from_env(var_name: &'static str, default: Duration) -> Result<Duration, ConfigError> {
        Self::parse_u64_from_env(var_name, default.as_secs()).map(Duration::from_secs)
    }
}
