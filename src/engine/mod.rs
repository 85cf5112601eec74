//! Cache-wrapped pair evaluation.
//!
//! [`MatchEngine::evaluate`] consults the match-result cache by
//! `(job id, candidate id, interview id)` before running the [`Aggregator`], and
//! stores what it computes. Two runs over the same pairs within the match TTL
//! return identical results without touching the similarity service.


use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::cache::{MatchCaches, match_key};
use crate::diagnostics::{Diagnostics, DiagnosticsSnapshot};
use crate::model::{Candidate, Interview, Job, MatchResult};
use crate::scoring::Aggregator;
use crate::similarity::SimilarityService;

/// Scores pairs through the [`Aggregator`], memoizing results per pair.
pub struct MatchEngine<S> {
    aggregator: Aggregator<S>,
    caches: Arc<MatchCaches>,
    diagnostics: Arc<Diagnostics>,
}

impl<S> std::fmt::Debug for MatchEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("aggregator", &self.aggregator)
            .field("caches", &self.caches)
            .finish_non_exhaustive()
    }
}

impl<S: SimilarityService> MatchEngine<S> {
    /// Builds the aggregator over `service`, sharing `caches` and `diagnostics`.
    pub fn new(service: S, caches: Arc<MatchCaches>, diagnostics: Arc<Diagnostics>) -> Self {
        Self {
            aggregator: Aggregator::new(service, Arc::clone(&caches), Arc::clone(&diagnostics)),
            caches,
            diagnostics,
        }
    }

    /// The underlying aggregator.
    pub fn aggregator(&self) -> &Aggregator<S> {
        &self.aggregator
    }

    /// Caches shared with the skill scorer.
    pub fn caches(&self) -> &Arc<MatchCaches> {
        &self.caches
    }

    /// Counters shared with the skill scorer.
    pub fn diagnostics(&self) -> &Arc<Diagnostics> {
        &self.diagnostics
    }

    /// Scores one pair, serving from the match-result cache when possible.
    pub async fn evaluate(
        &self,
        job: &Job,
        candidate: &Candidate,
        interview: Option<&Interview>,
    ) -> MatchResult {
        let key = match_key(&job.id, &candidate.id, interview.map(|i| i.id.as_str()));
        if let Some(cached) = self.caches.results.get(&key) {
            self.diagnostics.record_result_cache_hit();
            debug!(job_id = %job.id, candidate_id = %candidate.id, "match cache hit");
            return cached;
        }

        let started = Instant::now();
        let result = self.aggregator.aggregate(job, candidate, interview).await;
        self.diagnostics
            .record_evaluation(started.elapsed(), result.algorithm_used());

        debug!(
            job_id = %job.id,
            candidate_id = %candidate.id,
            score = result.score,
            algorithm = result.algorithm_used().map(|a| a.as_str()).unwrap_or("none"),
            "pair evaluated"
        );
        self.caches.results.set(key, result.clone());
        result
    }

    /// Counters plus current cache occupancy.
    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        self.diagnostics.snapshot(&self.caches)
    }
}

/// Shared handle to a [`MatchEngine`].
pub struct MatchEngineHandle<S> {
    inner: Arc<MatchEngine<S>>,
}

impl<S> Clone for MatchEngineHandle<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: SimilarityService> MatchEngineHandle<S> {
    /// Moves `engine` behind a shared pointer.
    pub fn new(engine: MatchEngine<S>) -> Self {
        Self {
            inner: Arc::new(engine),
        }
    }

    /// Number of live handles.
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<S> std::ops::Deref for MatchEngineHandle<S> {
    type Target = MatchEngine<S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<S> std::fmt::Debug for MatchEngineHandle<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngineHandle")
            .field("strong_count", &Arc::strong_count(&self.inner))
            .finish()
    }
}
