//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A set variable could not be parsed as an unsigned integer.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The similarity URL is not an http(s) URL.
    #[error("invalid similarity URL '{value}': must start with http:// or https://")]
    InvalidUrl { value: String },

    /// A size, TTL or interval that must be positive is zero.
    #[error("{name} must be greater than zero")]
    MustBePositive { name: &'static str },
}
