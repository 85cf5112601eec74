//! Concurrency budget for outbound similarity calls.

use std::sync::Arc;

use tokio::sync::Semaphore;

use super::client::SimilarityService;
use super::error::SimilarityError;
use super::model::SimilarityResult;
use crate::model::EnhancedSkills;

/// Wraps a [`SimilarityService`] so that at most `max_in_flight` calls run at once.
///
/// Pair evaluations inside a batch chunk run concurrently; this caps what actually
/// reaches the external service regardless of chunk size.
pub struct Throttled<S> {
    inner: S,
    permits: Arc<Semaphore>,
    max_in_flight: usize,
}

impl<S: SimilarityService> Throttled<S> {
    /// Caps `inner` at `max_in_flight` concurrent calls (at least 1).
    pub fn new(inner: S, max_in_flight: usize) -> Self {
        let max_in_flight = max_in_flight.max(1);
        Self {
            inner,
            permits: Arc::new(Semaphore::new(max_in_flight)),
            max_in_flight,
        }
    }

    /// The wrapped service.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Permit count.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    /// Permits not currently held by an in-flight call.
    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }
}

impl<S> std::fmt::Debug for Throttled<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttled")
            .field("max_in_flight", &self.max_in_flight)
            .field("available", &self.permits.available_permits())
            .finish_non_exhaustive()
    }
}

impl<S: SimilarityService> SimilarityService for Throttled<S> {
    async fn skill_similarity(
        &self,
        job_skills: &[String],
        candidate: &EnhancedSkills,
    ) -> Result<SimilarityResult, SimilarityError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| SimilarityError::LimiterClosed)?;
        self.inner.skill_similarity(job_skills, candidate).await
    }
}
