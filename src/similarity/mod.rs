//! External semantic skill-similarity service (consumed).
//!
//! The service compares job skill tokens with a candidate's verified skills and
//! returns a per-skill similarity in `[0, 1]` plus a strength tier. This module
//! only owns the request/response contract and the clients; how the result feeds a
//! skill score lives in [`crate::skills`].
//!
//! Any transport error, non-success status, `success: false` or out-of-range
//! payload is a [`SimilarityError`]. Callers treat every variant as "unavailable".

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;
pub mod throttle;


pub use client::{DisabledSimilarity, HttpSimilarityClient, SimilarityService};
pub use error::SimilarityError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSimilarityService;
pub use model::{
    MatchStrength, SimilarityRequest, SimilarityResponse, SimilarityResult, SkillMatch,
};
pub use throttle::Throttled;
