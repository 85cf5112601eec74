//! In-memory TTL caches shared across matching runs.
//!
//! [`MatchCaches`] bundles one [`TtlCache`] per concern (match results, skill
//! similarity, entity lookups), each with its own TTL. It is built once at startup
//! and handed to the engine by `Arc`.

pub mod clock;
pub mod config;
pub mod keys;
pub mod store;
pub mod ttl;


pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use keys::{NO_INTERVIEW, match_key, similarity_key};
pub use store::{
    CacheOccupancy, ENTITY_CACHE_NAME, EntityRecord, MATCH_CACHE_NAME, MatchCaches,
    SIMILARITY_CACHE_NAME,
};
pub use ttl::{CacheStats, TtlCache};
