use std::sync::Arc;

use tracing::debug;

use super::{RecordError, RecordSource};
use crate::cache::{EntityRecord, MatchCaches};
use crate::model::{Candidate, Interview, Job};

/// Serves job and interview lookups from the entity cache, falling through to `inner`.
///
/// A candidate without an interview is cached too. Candidate pools are always read
/// from `inner`.
#[derive(Debug)]
pub struct CachedRecords<R> {
    inner: R,
    caches: Arc<MatchCaches>,
}

impl<R: RecordSource> CachedRecords<R> {
    /// Wraps `inner` with the entity cache in `caches`.
    pub fn new(inner: R, caches: Arc<MatchCaches>) -> Self {
        Self { inner, caches }
    }

    /// The uncached source.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

fn job_key(job_id: &str) -> String {
    format!("job:{job_id}")
}

fn interview_key(candidate_id: &str) -> String {
    format!("interview:{candidate_id}")
}

impl<R: RecordSource> RecordSource for CachedRecords<R> {
    async fn job(&self, job_id: &str) -> Result<Job, RecordError> {
        let key = job_key(job_id);
        if let Some(EntityRecord::Job(job)) = self.caches.entities.get(&key) {
            debug!(job_id, "entity cache hit");
            return Ok(job);
        }

        let job = self.inner.job(job_id).await?;
        self.caches.entities.set(key, EntityRecord::Job(job.clone()));
        Ok(job)
    }

    async fn candidates(&self) -> Result<Vec<Candidate>, RecordError> {
        self.inner.candidates().await
    }

    async fn interview_for(&self, candidate_id: &str) -> Result<Option<Interview>, RecordError> {
        let key = interview_key(candidate_id);
        if let Some(EntityRecord::Interview(interview)) = self.caches.entities.get(&key) {
            debug!(candidate_id, "entity cache hit");
            return Ok(interview);
        }

        let interview = self.inner.interview_for(candidate_id).await?;
        self.caches
            .entities
            .set(key, EntityRecord::Interview(interview.clone()));
        Ok(interview)
    }
}
