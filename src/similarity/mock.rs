use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use super::client::SimilarityService;
use super::error::SimilarityError;
use super::model::{MatchStrength, SimilarityResult, SkillMatch};
use crate::model::EnhancedSkills;

/// Similarity reported when a job skill only hits a synonym.
pub const MOCK_SYNONYM_SIMILARITY: f64 = 0.85;

#[derive(Debug, Clone)]
enum Behavior {
    Lexical,
    Fixed(SimilarityResult),
    Fail,
}

/// In-process similarity service for tests.
///
/// By default it scores lexically: `1.0` for a direct skill hit, `0.85` for a
/// synonym hit, `0.0` otherwise.
#[derive(Debug)]
pub struct MockSimilarityService {
    behavior: Behavior,
    fail_for_skill: Option<String>,
    delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    requests: Mutex<Vec<Vec<String>>>,
}

impl Default for MockSimilarityService {
    fn default() -> Self {
        Self::with_behavior(Behavior::Lexical)
    }
}

impl MockSimilarityService {
    /// Mock that scores by lexical overlap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answers with a non-success status.
    pub fn failing() -> Self {
        Self::with_behavior(Behavior::Fail)
    }

    /// Always answers with `result`.
    pub fn with_result(result: SimilarityResult) -> Self {
        Self::with_behavior(Behavior::Fixed(result))
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            fail_for_skill: None,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails any request whose candidate has a verified skill with this token.
    pub fn fail_for_skill(mut self, skill: &str) -> Self {
        self.fail_for_skill = Some(skill.to_lowercase());
        self
    }

    /// Sleeps for `delay` inside every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of calls observed running at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    /// Job-skill lists received, in call order.
    pub fn requests(&self) -> Vec<Vec<String>> {
        self.requests.lock().clone()
    }

    fn respond(
        &self,
        job_skills: &[String],
        candidate: &EnhancedSkills,
    ) -> Result<SimilarityResult, SimilarityError> {
        if let Some(ref poisoned) = self.fail_for_skill
            && candidate
                .verified_skills
                .iter()
                .any(|s| s.skill.to_lowercase() == *poisoned)
        {
            return Err(SimilarityError::Status { status: 503 });
        }

        match &self.behavior {
            Behavior::Fail => Err(SimilarityError::Status { status: 503 }),
            Behavior::Fixed(result) => Ok(result.clone()),
            Behavior::Lexical => Ok(lexical_similarity(job_skills, candidate)),
        }
    }
}

impl SimilarityService for MockSimilarityService {
    async fn skill_similarity(
        &self,
        job_skills: &[String],
        candidate: &EnhancedSkills,
    ) -> Result<SimilarityResult, SimilarityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(job_skills.to_vec());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let result = self.respond(job_skills, candidate);

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

fn lexical_similarity(job_skills: &[String], candidate: &EnhancedSkills) -> SimilarityResult {
    let matches: Vec<SkillMatch> = job_skills
        .iter()
        .map(|job_skill| {
            let token = job_skill.to_lowercase();
            let direct = candidate
                .verified_skills
                .iter()
                .find(|s| s.matches_directly(&token));
            let (candidate_skill, similarity_score) = match direct {
                Some(skill) => (Some(skill.display_name.clone()), 1.0),
                None => match candidate
                    .verified_skills
                    .iter()
                    .find(|s| s.matches_synonym(&token))
                {
                    Some(skill) => (Some(skill.display_name.clone()), MOCK_SYNONYM_SIMILARITY),
                    None => (None, 0.0),
                },
            };
            SkillMatch {
                job_skill: job_skill.clone(),
                candidate_skill,
                similarity_score,
                match_strength: MatchStrength::classify(similarity_score),
            }
        })
        .collect();

    let count = |threshold: f64| {
        matches
            .iter()
            .filter(|m| m.similarity_score >= threshold)
            .count() as u32
    };
    let total: f64 = matches.iter().map(|m| m.similarity_score).sum();
    let n = job_skills.len().max(1) as f64;

    SimilarityResult {
        overall_score: (total / n * 100.0 * 100.0).round() / 100.0,
        strong_matches: count(super::model::STRONG_MATCH_THRESHOLD),
        moderate_matches: count(super::model::MODERATE_MATCH_THRESHOLD),
        weak_matches: count(super::model::WEAK_MATCH_THRESHOLD),
        coverage: (count(super::model::WEAK_MATCH_THRESHOLD) as f64 / n * 100.0 * 100.0).round()
            / 100.0,
        job_skills_count: job_skills.len() as u32,
        matches,
    }
}
