//! Boundary to the storage layer that owns jobs, candidates and interviews.
//!
//! The matching core only reads records. [`InMemoryRecords`] serves one
//! [`MatchRun`] document; [`CachedRecords`] puts the entity-lookup cache in front
//! of any [`RecordSource`].

pub mod cached;
pub mod error;
pub mod memory;


pub use cached::CachedRecords;
pub use error::RecordError;
pub use memory::{InMemoryRecords, MatchRun};

use crate::model::{Candidate, Interview, Job};

/// Read-only access to materialized records.
pub trait RecordSource: Send + Sync {
    fn job(&self, job_id: &str) -> impl std::future::Future<Output = Result<Job, RecordError>> + Send;

    /// Candidate pool, in the order results should come back.
    fn candidates(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Candidate>, RecordError>> + Send;

    /// The interview linked to a candidate, if any.
    fn interview_for(
        &self,
        candidate_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Interview>, RecordError>> + Send;
}
