//! Key/value store with per-entry expiry.
//!
//! Entries expire independently, `ttl` after their own insertion. Expiry is lazy:
//! a [`TtlCache::get`] that finds an expired entry removes it, and every
//! `sweep_interval`-th [`TtlCache::set`] walks the whole map once. There is no
//! background timer.
//!
//! Concurrent `set` on one key is last-write-wins. A TTL too large to add to the
//! clock's current instant means the entry never expires.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde::Serialize;
use tracing::debug;

use super::clock::{Clock, SystemClock};

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    /// `None` when `now + ttl` overflows.
    expires_at: Option<Instant>,
}

impl<V> Entry<V> {
    #[inline]
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Counters for one cache instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub name: String,
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
}

/// Thread-safe map whose entries expire `ttl` after insertion.
pub struct TtlCache<K, V> {
    name: &'static str,
    ttl: Duration,
    sweep_interval: u64,
    clock: Arc<dyn Clock>,
    entries: RwLock<HashMap<K, Entry<V>>>,
    inserts: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
    expirations: AtomicU64,
}

impl<K, V> std::fmt::Debug for TtlCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("name", &self.name)
            .field("ttl", &self.ttl)
            .field("sweep_interval", &self.sweep_interval)
            .field("entries", &self.entries.read().len())
            .finish()
    }
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Creates a cache on the system clock.
    pub fn new(name: &'static str, ttl: Duration, sweep_interval: u64) -> Self {
        Self::with_clock(name, ttl, sweep_interval, Arc::new(SystemClock))
    }

    /// Creates a cache reading time from `clock`. A `sweep_interval` of 0 is treated as 1.
    pub fn with_clock(
        name: &'static str,
        ttl: Duration,
        sweep_interval: u64,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            name,
            ttl,
            sweep_interval: sweep_interval.max(1),
            clock,
            entries: RwLock::new(HashMap::new()),
            inserts: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            expirations: AtomicU64::new(0),
        }
    }

    /// Name reported in [`CacheStats`].
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Lifetime of each entry.
    #[inline]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns a clone of the live value for `key`.
    ///
    /// An expired entry is removed and reported as absent.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if !entry.is_expired(now) => {
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    return Some(entry.value.clone());
                }
                Some(_) => {}
                None => {
                    self.misses.fetch_add(1, Ordering::Relaxed);
                    return None;
                }
            }
        }

        // Re-check under the write lock: a concurrent set may have refreshed it.
        let mut entries = self.entries.write();
        if let Some(entry) = entries.get(key) {
            if !entry.is_expired(now) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.value.clone());
            }
            entries.remove(key);
            self.expirations.fetch_add(1, Ordering::Relaxed);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Inserts `value`, expiring `ttl` from now. Every `sweep_interval`-th call also sweeps.
    pub fn set(&self, key: K, value: V) {
        let expires_at = self.clock.now().checked_add(self.ttl);
        self.entries.write().insert(key, Entry { value, expires_at });

        let inserted = self.inserts.fetch_add(1, Ordering::Relaxed) + 1;
        if inserted % self.sweep_interval == 0 {
            let removed = self.sweep();
            debug!(cache = self.name, inserted, removed, "periodic sweep");
        }
    }

    /// Removes every expired entry. Returns how many were removed.
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - entries.len();
        self.expirations.fetch_add(removed as u64, Ordering::Relaxed);
        removed
    }

    /// Drops every entry. Counters are kept.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Number of stored entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// `true` when nothing is stored, expired or not.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Current occupancy and counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            name: self.name.to_string(),
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expirations: self.expirations.load(Ordering::Relaxed),
        }
    }
}
