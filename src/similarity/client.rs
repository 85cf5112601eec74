use std::time::Duration;

use tracing::debug;

use super::error::SimilarityError;
use super::model::{SimilarityRequest, SimilarityResponse, SimilarityResult};
use crate::constants::SIMILARITY_ENDPOINT_PATH;
use crate::model::EnhancedSkills;

/// Semantic skill-similarity backend.
pub trait SimilarityService: Send + Sync {
    /// Compares job skill tokens against a candidate's enhanced skills.
    fn skill_similarity(
        &self,
        job_skills: &[String],
        candidate: &EnhancedSkills,
    ) -> impl std::future::Future<Output = Result<SimilarityResult, SimilarityError>> + Send;
}

impl<S: SimilarityService> SimilarityService for std::sync::Arc<S> {
    async fn skill_similarity(
        &self,
        job_skills: &[String],
        candidate: &EnhancedSkills,
    ) -> Result<SimilarityResult, SimilarityError> {
        (**self).skill_similarity(job_skills, candidate).await
    }
}

#[derive(Clone)]
/// HTTP client for the similarity endpoint.
pub struct HttpSimilarityClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSimilarityClient {
    /// Creates a client for `base_url` with a per-request `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SimilarityError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SimilarityError::Transport {
                url: base_url.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                SIMILARITY_ENDPOINT_PATH
            ),
        })
    }

    /// Returns the full endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for HttpSimilarityClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSimilarityClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl SimilarityService for HttpSimilarityClient {
    async fn skill_similarity(
        &self,
        job_skills: &[String],
        candidate: &EnhancedSkills,
    ) -> Result<SimilarityResult, SimilarityError> {
        let request = SimilarityRequest {
            job_skills,
            candidate_enhanced_skills: candidate,
        };

        debug!(
            endpoint = %self.endpoint,
            job_skills = job_skills.len(),
            candidate_skills = candidate.verified_skills.len(),
            "Requesting skill similarity"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| SimilarityError::Transport {
                url: self.endpoint.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SimilarityError::Status {
                status: status.as_u16(),
            });
        }

        let body: SimilarityResponse =
            response
                .json()
                .await
                .map_err(|e| SimilarityError::Malformed {
                    reason: e.to_string(),
                })?;

        body.into_result()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Stand-in used when no similarity endpoint is configured; always unavailable.
pub struct DisabledSimilarity;

impl SimilarityService for DisabledSimilarity {
    async fn skill_similarity(
        &self,
        _job_skills: &[String],
        _candidate: &EnhancedSkills,
    ) -> Result<SimilarityResult, SimilarityError> {
        Err(SimilarityError::Disabled)
    }
}
