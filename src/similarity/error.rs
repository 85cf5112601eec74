use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the external similarity service.
///
/// None of these abort a matching run; the skill chain falls through to the next
/// strategy on any of them.
pub enum SimilarityError {
    /// Request could not be sent or timed out.
    #[error("similarity request to '{url}' failed: {message}")]
    Transport {
        /// Endpoint URL.
        url: String,
        /// Error message.
        message: String,
    },

    /// Service answered with a non-success HTTP status.
    #[error("similarity service returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Service answered `success: false`.
    #[error("similarity service reported failure")]
    Unsuccessful,

    /// Payload could not be decoded or failed validation.
    #[error("malformed similarity payload: {reason}")]
    Malformed {
        /// What was wrong.
        reason: String,
    },

    /// No service is configured.
    #[error("similarity service disabled")]
    Disabled,

    /// Concurrency limiter was closed.
    #[error("similarity limiter closed")]
    LimiterClosed,
}

impl SimilarityError {
    /// Returns `true` for failures worth a warning (as opposed to a disabled service).
    pub fn is_failure(&self) -> bool {
        !matches!(self, SimilarityError::Disabled)
    }
}
