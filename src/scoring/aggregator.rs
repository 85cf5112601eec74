use std::sync::Arc;

use tracing::debug;

use crate::cache::MatchCaches;
use crate::constants::{EXPERIENCE_WEIGHT, MATCH_DETAIL_SKILL_LIMIT, MAX_SCORE, ROLE_EXACT_POINTS, SKILL_WEIGHT};
use crate::diagnostics::Diagnostics;
use crate::model::{Candidate, CompatibilityLevel, Interview, Job, MatchBreakdown, MatchResult};
use crate::roles::{RoleCode, RoleMatch, standardize};
use crate::similarity::SimilarityService;
use crate::skills::SkillScorer;

use super::points::{experience_points, skill_points};

pub const NO_ROLE_DATA_DETAIL: &str = "No candidate role data";
const UNSPECIFIED_ROLE: &str = "unspecified";

/// Combines role, skill and experience into a [`MatchResult`].
///
/// Role gating runs first: a missing or incompatible candidate role scores 0 and no
/// skill strategy runs.
pub struct Aggregator<S> {
    skills: SkillScorer<S>,
    diagnostics: Arc<Diagnostics>,
}

impl<S> std::fmt::Debug for Aggregator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregator")
            .field("skills", &self.skills)
            .finish_non_exhaustive()
    }
}

impl<S: SimilarityService> Aggregator<S> {
    /// Aggregator with a default skill chain over `service`.
    pub fn new(service: S, caches: Arc<MatchCaches>, diagnostics: Arc<Diagnostics>) -> Self {
        Self {
            skills: SkillScorer::new(service, caches, Arc::clone(&diagnostics)),
            diagnostics,
        }
    }

    /// Aggregator over a preconfigured skill chain.
    pub fn from_scorer(skills: SkillScorer<S>, diagnostics: Arc<Diagnostics>) -> Self {
        Self {
            skills,
            diagnostics,
        }
    }

    /// The skill chain.
    pub fn skills(&self) -> &SkillScorer<S> {
        &self.skills
    }

    /// Scores one pair. Never fails: unavailable strategies fall back.
    pub async fn aggregate(
        &self,
        job: &Job,
        candidate: &Candidate,
        interview: Option<&Interview>,
    ) -> MatchResult {
        let job_role = standardize(&job.title);
        let candidate_role = interview
            .and_then(Interview::role_text)
            .and_then(standardize);

        let Some(candidate_role) = candidate_role else {
            return self.gated(job, candidate, interview, NO_ROLE_DATA_DETAIL.to_string());
        };

        let role_match = match job_role.as_ref() {
            Some(job_role) => RoleMatch::resolve(job_role, &candidate_role),
            None => RoleMatch::Incompatible,
        };
        if !role_match.is_compatible() {
            debug!(
                job_id = %job.id,
                candidate_id = %candidate.id,
                job_role = job_role.as_ref().map(RoleCode::as_str).unwrap_or(UNSPECIFIED_ROLE),
                candidate_role = %candidate_role,
                "role mismatch"
            );
            let detail = format!(
                "Role mismatch: looking for {}, candidate is {candidate_role}",
                job_role.as_ref().map(RoleCode::as_str).unwrap_or(UNSPECIFIED_ROLE)
            );
            return self.gated(job, candidate, interview, detail);
        }

        let role_score = role_match.points();
        let mut details = Vec::with_capacity(2 + MATCH_DETAIL_SKILL_LIMIT);
        let label = match role_match {
            RoleMatch::Exact => "exact match",
            _ => "compatible",
        };
        details.push(format!(
            "Role: {candidate_role} ({label}) -> {role_score}/{ROLE_EXACT_POINTS}"
        ));

        let skill = self.skills.score_skills(&job.skill_tokens(), interview).await;
        let skill_score = skill_points(skill.score);
        details.push(format!(
            "Skills: {}/{} matched -> {skill_score}/{SKILL_WEIGHT}",
            skill.matched, skill.total
        ));
        details.extend(skill.details.into_iter().take(MATCH_DETAIL_SKILL_LIMIT));

        let candidate_years = candidate.years();
        let required_years = job.required_years();
        let experience_score = experience_points(candidate_years, required_years);
        details.push(format!(
            "Experience: {candidate_years}/{required_years} years -> {experience_score}/{EXPERIENCE_WEIGHT}"
        ));

        let breakdown = MatchBreakdown {
            role_score,
            skill_score,
            experience_score,
            algorithm_used: skill.algorithm,
        };
        let score = breakdown.total().min(MAX_SCORE);

        MatchResult {
            job_id: job.id.clone(),
            candidate_id: candidate.id.clone(),
            score,
            match_details: details,
            breakdown,
            compatibility: CompatibilityLevel::from_score(score),
            has_interview: interview.is_some(),
            verified: candidate.is_verified(),
        }
    }

    fn gated(
        &self,
        job: &Job,
        candidate: &Candidate,
        interview: Option<&Interview>,
        detail: String,
    ) -> MatchResult {
        self.diagnostics.record_role_gated();
        MatchResult {
            job_id: job.id.clone(),
            candidate_id: candidate.id.clone(),
            score: 0,
            match_details: vec![detail],
            breakdown: MatchBreakdown::default(),
            compatibility: CompatibilityLevel::Low,
            has_interview: interview.is_some(),
            verified: candidate.is_verified(),
        }
    }
}
