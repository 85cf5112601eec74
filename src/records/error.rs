use thiserror::Error;

/// Errors from a [`RecordSource`](super::RecordSource).
#[derive(Debug, Error)]
pub enum RecordError {
    /// No job with this id exists in the source.
    #[error("job not found: {job_id}")]
    JobNotFound { job_id: String },

    /// The backing store could not answer.
    #[error("record source unavailable: {reason}")]
    Unavailable { reason: String },
}
