//! Chunked evaluation of one job against a candidate pool.
//!
//! The pool is split into chunks of `chunk_size`. Chunks run one after another
//! with `chunk_delay` between them; every pair inside a chunk is evaluated
//! concurrently. Results come back in input order.
//!
//! Ranked views ([`BatchController::shortlist`], [`BatchController::recommend_jobs`])
//! are built on the same runs and go through [`rank_matches`].

mod ranking;
#[cfg(test)]
mod tests;

pub use ranking::rank_matches;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use futures_util::future::{join_all, try_join_all};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::constants::{
    DEFAULT_BATCH_DELAY, DEFAULT_BATCH_SIZE, RECOMMENDATION_MIN_SCORE, SHORTLIST_LIMIT,
};
use crate::engine::MatchEngineHandle;
use crate::model::{Candidate, Interview, Job, MatchResult};
use crate::records::{MatchRun, RecordError, RecordSource};
use crate::similarity::SimilarityService;

/// Chunking for a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Pairs evaluated concurrently. 0 is treated as 1.
    pub chunk_size: usize,
    /// Pause between chunks (not after the last one).
    pub chunk_delay: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_BATCH_SIZE,
            chunk_delay: DEFAULT_BATCH_DELAY,
        }
    }
}

impl BatchConfig {
    /// Config with `chunk_size` pairs per chunk and `chunk_delay` between chunks.
    pub fn new(chunk_size: usize, chunk_delay: Duration) -> Self {
        Self {
            chunk_size,
            chunk_delay,
        }
    }

    #[inline]
    fn effective_chunk_size(&self) -> usize {
        self.chunk_size.max(1)
    }
}

/// Runs one job against a pool, or one candidate against many jobs.
#[derive(Debug)]
pub struct BatchController<S> {
    engine: MatchEngineHandle<S>,
    config: BatchConfig,
}

/// One pair to evaluate.
type Pair<'a> = (&'a Job, &'a Candidate, Option<&'a Interview>);

impl<S: SimilarityService> BatchController<S> {
    /// Creates a controller that runs pairs through `engine`.
    pub fn new(engine: MatchEngineHandle<S>, config: BatchConfig) -> Self {
        Self { engine, config }
    }

    /// The shared engine (and through it, the caches and diagnostics).
    pub fn engine(&self) -> &MatchEngineHandle<S> {
        &self.engine
    }

    /// Chunking settings.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Scores every candidate against `job`, in input order.
    ///
    /// `interviews` is keyed by candidate id. A pair that fails to reach the
    /// similarity service falls back locally; nothing here aborts the run.
    #[instrument(skip_all, fields(job_id = %job.id, candidates = candidates.len()))]
    pub async fn match_pool(
        &self,
        job: &Job,
        candidates: &[Candidate],
        interviews: &HashMap<String, Interview>,
    ) -> Vec<MatchResult> {
        let pairs: Vec<Pair<'_>> = candidates
            .iter()
            .map(|candidate| (job, candidate, interviews.get(&candidate.id)))
            .collect();
        self.evaluate_pairs(&pairs).await
    }

    /// The top [`SHORTLIST_LIMIT`] role-compatible candidates for `job`, best first.
    pub async fn shortlist(
        &self,
        job: &Job,
        candidates: &[Candidate],
        interviews: &HashMap<String, Interview>,
    ) -> Vec<MatchResult> {
        let results = self.match_pool(job, candidates, interviews).await;
        rank_matches(results, 1, SHORTLIST_LIMIT)
    }

    /// Scores one candidate against every job and returns the best `limit` jobs.
    ///
    /// Jobs scoring below [`RECOMMENDATION_MIN_SCORE`] are dropped, so gated jobs
    /// never appear. Pair results are shared with [`match_pool`](Self::match_pool)
    /// through the match cache.
    #[instrument(skip_all, fields(candidate_id = %candidate.id, jobs = jobs.len()))]
    pub async fn recommend_jobs(
        &self,
        candidate: &Candidate,
        interview: Option<&Interview>,
        jobs: &[Job],
        limit: usize,
    ) -> Vec<MatchResult> {
        let pairs: Vec<Pair<'_>> = jobs.iter().map(|job| (job, candidate, interview)).collect();
        let results = self.evaluate_pairs(&pairs).await;
        rank_matches(results, RECOMMENDATION_MIN_SCORE, limit)
    }

    async fn evaluate_pairs(&self, pairs: &[Pair<'_>]) -> Vec<MatchResult> {
        let run_id = Uuid::new_v4();
        let chunk_size = self.config.effective_chunk_size();
        let chunk_count = pairs.len().div_ceil(chunk_size);
        let started = Instant::now();

        self.engine.diagnostics().record_run();
        info!(%run_id, chunk_size, chunks = chunk_count, "matching run started");

        let mut results = Vec::with_capacity(pairs.len());
        for (index, chunk) in pairs.chunks(chunk_size).enumerate() {
            if index > 0 && !self.config.chunk_delay.is_zero() {
                tokio::time::sleep(self.config.chunk_delay).await;
            }

            let evaluations = chunk
                .iter()
                .map(|&(job, candidate, interview)| self.engine.evaluate(job, candidate, interview));
            results.extend(join_all(evaluations).await);

            debug!(%run_id, chunk = index, size = chunk.len(), "chunk complete");
        }

        info!(
            %run_id,
            results = results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "matching run finished"
        );
        results
    }

    /// Runs [`match_pool`](Self::match_pool) over a [`MatchRun`] document.
    pub async fn match_run(&self, run: &MatchRun) -> Vec<MatchResult> {
        self.match_pool(&run.job, &run.candidates, &run.interviews)
            .await
    }

    /// Loads the job, its pool and their interviews from `source`, then matches.
    ///
    /// Fails only on lookups, before any pair is evaluated.
    pub async fn match_job<R: RecordSource>(
        &self,
        job_id: &str,
        source: &R,
    ) -> Result<Vec<MatchResult>, RecordError> {
        let job = source.job(job_id).await?;
        let candidates = source.candidates().await?;

        let lookups = candidates.iter().map(|candidate| async move {
            let interview = source.interview_for(&candidate.id).await?;
            Ok::<_, RecordError>(interview.map(|i| (candidate.id.clone(), i)))
        });
        let interviews: HashMap<String, Interview> = try_join_all(lookups)
            .await?
            .into_iter()
            .flatten()
            .collect();

        Ok(self.match_pool(&job, &candidates, &interviews).await)
    }
}
