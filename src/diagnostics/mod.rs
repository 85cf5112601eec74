//! Process-wide counters for matching runs.
//!
//! Every counter is a relaxed atomic. Read them together through
//! [`Diagnostics::snapshot`], which also reports cache occupancy.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

use crate::cache::{CacheOccupancy, MatchCaches};
use crate::model::SkillAlgorithm;


/// Process-wide counters for matching runs.
#[derive(Debug, Default)]
pub struct Diagnostics {
    runs: AtomicU64,
    evaluations: AtomicU64,
    evaluation_micros: AtomicU64,
    result_cache_hits: AtomicU64,
    similarity_cache_hits: AtomicU64,
    external_calls: AtomicU64,
    external_failures: AtomicU64,
    role_gated: AtomicU64,
    external_similarity: AtomicU64,
    verified_overlap: AtomicU64,
    legacy_keyword: AtomicU64,
    no_requirements: AtomicU64,
    no_interview: AtomicU64,
}

/// Results counted per skill strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlgorithmCounts {
    pub external_similarity: u64,
    pub verified_overlap: u64,
    pub legacy_keyword: u64,
    pub no_requirements: u64,
    /// Pairs where no strategy ran.
    pub none: u64,
}

/// Point-in-time copy of [`Diagnostics`] plus cache occupancy.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsSnapshot {
    pub runs: u64,
    pub evaluations: u64,
    pub total_evaluation_ms: f64,
    pub mean_evaluation_ms: f64,
    pub result_cache_hits: u64,
    pub similarity_cache_hits: u64,
    pub external_calls: u64,
    pub external_failures: u64,
    pub role_gated: u64,
    pub algorithms: AlgorithmCounts,
    pub caches: CacheOccupancy,
}

impl Diagnostics {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one batch run.
    pub fn record_run(&self) {
        self.runs.fetch_add(1, Ordering::Relaxed);
    }

    /// Records one computed (not cached) pair evaluation.
    pub fn record_evaluation(&self, elapsed: Duration, algorithm: Option<SkillAlgorithm>) {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
        let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.evaluation_micros.fetch_add(micros, Ordering::Relaxed);

        let counter = match algorithm {
            Some(SkillAlgorithm::ExternalSimilarity) => &self.external_similarity,
            Some(SkillAlgorithm::VerifiedOverlap) => &self.verified_overlap,
            Some(SkillAlgorithm::LegacyKeyword) => &self.legacy_keyword,
            Some(SkillAlgorithm::NoRequirements) => &self.no_requirements,
            None => &self.no_interview,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts a pair served from the match cache.
    pub fn record_result_cache_hit(&self) {
        self.result_cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts a similarity result served from cache.
    pub fn record_similarity_cache_hit(&self) {
        self.similarity_cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts a request to the similarity service.
    pub fn record_external_call(&self) {
        self.external_calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts a failed similarity request.
    pub fn record_external_failure(&self) {
        self.external_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts a pair gated on role.
    pub fn record_role_gated(&self) {
        self.role_gated.fetch_add(1, Ordering::Relaxed);
    }

    /// Pairs evaluated (cache hits excluded).
    pub fn evaluations(&self) -> u64 {
        self.evaluations.load(Ordering::Relaxed)
    }

    /// Requests sent to the similarity service.
    pub fn external_calls(&self) -> u64 {
        self.external_calls.load(Ordering::Relaxed)
    }

    /// Failed similarity requests.
    pub fn external_failures(&self) -> u64 {
        self.external_failures.load(Ordering::Relaxed)
    }

    /// Results per skill algorithm.
    pub fn algorithm_counts(&self) -> AlgorithmCounts {
        AlgorithmCounts {
            external_similarity: self.external_similarity.load(Ordering::Relaxed),
            verified_overlap: self.verified_overlap.load(Ordering::Relaxed),
            legacy_keyword: self.legacy_keyword.load(Ordering::Relaxed),
            no_requirements: self.no_requirements.load(Ordering::Relaxed),
            none: self.no_interview.load(Ordering::Relaxed),
        }
    }

    /// Serializable view of every counter and cache.
    pub fn snapshot(&self, caches: &MatchCaches) -> DiagnosticsSnapshot {
        let evaluations = self.evaluations();
        let total_ms = self.evaluation_micros.load(Ordering::Relaxed) as f64 / 1_000.0;
        let mean_ms = if evaluations == 0 {
            0.0
        } else {
            total_ms / evaluations as f64
        };

        DiagnosticsSnapshot {
            runs: self.runs.load(Ordering::Relaxed),
            evaluations,
            total_evaluation_ms: total_ms,
            mean_evaluation_ms: mean_ms,
            result_cache_hits: self.result_cache_hits.load(Ordering::Relaxed),
            similarity_cache_hits: self.similarity_cache_hits.load(Ordering::Relaxed),
            external_calls: self.external_calls(),
            external_failures: self.external_failures(),
            role_gated: self.role_gated.load(Ordering::Relaxed),
            algorithms: self.algorithm_counts(),
            caches: caches.occupancy(),
        }
    }
}
