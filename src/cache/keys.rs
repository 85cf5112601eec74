//! Cache key derivation.

use crate::hashing::fingerprint;
use crate::model::{EnhancedSkills, normalize_token};

/// Placeholder for a pair without an interview.
pub const NO_INTERVIEW: &str = "none";

/// Key for the match-result cache: `(job id, candidate id, interview id or "none")`.
pub fn match_key(job_id: &str, candidate_id: &str, interview_id: Option<&str>) -> String {
    format!(
        "match:{job_id}:{candidate_id}:{}",
        interview_id.unwrap_or(NO_INTERVIEW)
    )
}

/// Key for the similarity cache.
///
/// Every token is hashed as its own part. Job skills are sorted; only the first `candidate_limit` candidate skill tokens
/// are taken (in stored order) and then sorted. Candidates that differ only past
/// that prefix share a key.
pub fn similarity_key(
    job_skills: &[String],
    candidate: &EnhancedSkills,
    candidate_limit: usize,
) -> String {
    let mut job: Vec<String> = job_skills.iter().map(|s| normalize_token(s)).collect();
    job.sort_unstable();

    let mut held: Vec<String> = candidate
        .verified_skills
        .iter()
        .take(candidate_limit)
        .map(|s| normalize_token(&s.skill))
        .collect();
    held.sort_unstable();

    // The job count marks where candidate tokens begin.
    let mut parts = Vec::with_capacity(1 + job.len() + held.len());
    parts.push(job.len().to_string());
    parts.extend(job);
    parts.extend(held);
    format!("sim:{}", fingerprint(&parts))
}
