use std::sync::Arc;

use super::*;
use crate::cache::MatchCaches;
use crate::diagnostics::Diagnostics;
use crate::model::{
    Candidate, CompatibilityLevel, EnhancedSkills, Interview, Job, SkillAlgorithm, SkillCategory,
    VerifiedSkill, WorkMode,
};
use crate::similarity::{DisabledSimilarity, MockSimilarityService, SimilarityService};

fn job(title: &str, skills: &[&str], years: i32) -> Job {
    Job {
        id: "job-1".into(),
        title: title.into(),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        required_experience_years: years,
        work_mode: WorkMode::Remote,
    }
}

fn candidate(years: i32) -> Candidate {
    Candidate {
        id: "cand-1".into(),
        experience_years: years,
        linkedin: None,
        github: Some("https://github.com/example".into()),
    }
}

fn interview(role: &str, skills: &[(&str, f64)]) -> Interview {
    Interview {
        id: "iv-1".into(),
        role: Some(role.into()),
        enhanced_skills: Some(EnhancedSkills::new(
            skills
                .iter()
                .map(|(token, score)| VerifiedSkill {
                    skill: token.to_string(),
                    display_name: token.to_string(),
                    score: *score,
                    synonyms: vec![],
                    category: SkillCategory::General,
                })
                .collect(),
        )),
        ..Default::default()
    }
}

fn aggregator<S: SimilarityService>(service: S) -> Aggregator<S> {
    Aggregator::new(
        service,
        Arc::new(MatchCaches::default()),
        Arc::new(Diagnostics::new()),
    )
}

#[test]
fn test_experience_points() {
    assert_eq!(experience_points(5, 3), 10);
    assert_eq!(experience_points(3, 3), 10);
    assert_eq!(experience_points(0, 0), 10);
    assert_eq!(experience_points(2, 3), 6);
    assert_eq!(experience_points(5, 10), 6);
    assert_eq!(experience_points(4, 10), 4);
    assert_eq!(experience_points(1, 3), 3);
    assert_eq!(experience_points(1, 10), 2);
    assert_eq!(experience_points(0, 5), 2);
}

#[test]
fn test_skill_points() {
    assert_eq!(skill_points(0), 0);
    assert_eq!(skill_points(50), 13);
    assert_eq!(skill_points(80), 20);
    assert_eq!(skill_points(100), 25);
    assert_eq!(skill_points(250), 25);
}

#[tokio::test]
async fn test_exact_role_local_overlap_scores_88() {
    let aggregator = aggregator(DisabledSimilarity);
    let result = aggregator
        .aggregate(
            &job("Data Analyst", &["python", "sql"], 3),
            &candidate(5),
            Some(&interview("data analyst", &[("python", 90.0)])),
        )
        .await;

    assert_eq!(result.breakdown.role_score, 65);
    assert_eq!(result.breakdown.skill_score, 13);
    assert_eq!(result.breakdown.experience_score, 10);
    assert_eq!(result.score, 88);
    assert_eq!(result.algorithm_used(), Some(SkillAlgorithm::VerifiedOverlap));
    assert_eq!(result.compatibility, CompatibilityLevel::Excellent);
    assert_eq!(result.match_details[0], "Role: data_analyst (exact match) -> 65/65");
    assert_eq!(result.match_details[1], "Skills: 1/2 matched -> 13/25");
    assert_eq!(
        result.match_details.last().map(String::as_str),
        Some("Experience: 5/3 years -> 10/10")
    );
}

#[tokio::test]
async fn test_external_strategy_recorded_in_breakdown() {
    let aggregator = aggregator(MockSimilarityService::new());
    let result = aggregator
        .aggregate(
            &job("Data Analyst", &["python", "sql"], 3),
            &candidate(5),
            Some(&interview("Data Analyst", &[("python", 90.0)])),
        )
        .await;

    assert_eq!(result.algorithm_used(), Some(SkillAlgorithm::ExternalSimilarity));
    assert_eq!(result.score, 88);
}

#[tokio::test]
async fn test_no_interview_scores_zero() {
    let aggregator = aggregator(DisabledSimilarity);
    let result = aggregator
        .aggregate(&job("Data Analyst", &["python"], 2), &candidate(5), None)
        .await;

    assert_eq!(result.score, 0);
    assert_eq!(result.algorithm_used(), None);
    assert!(!result.has_interview);
    assert_eq!(result.match_details, vec![NO_ROLE_DATA_DETAIL.to_string()]);
}

#[tokio::test]
async fn test_blank_role_is_no_role_data() {
    let aggregator = aggregator(DisabledSimilarity);
    let result = aggregator
        .aggregate(
            &job("Data Analyst", &["python"], 2),
            &candidate(5),
            Some(&interview("   ", &[("python", 90.0)])),
        )
        .await;

    assert_eq!(result.score, 0);
    assert!(result.has_interview);
    assert_eq!(result.match_details, vec![NO_ROLE_DATA_DETAIL.to_string()]);
}

#[tokio::test]
async fn test_role_mismatch_gates_to_zero() {
    let aggregator = aggregator(MockSimilarityService::new());
    let result = aggregator
        .aggregate(
            &job("Data Analyst", &["python"], 2),
            &candidate(5),
            Some(&interview("Mechanical Engineer", &[("python", 90.0)])),
        )
        .await;

    assert_eq!(result.score, 0);
    assert!(!result.is_role_compatible());
    assert_eq!(
        result.match_details,
        vec!["Role mismatch: looking for data_analyst, candidate is mechanical_engineer".to_string()]
    );
    assert_eq!(aggregator.skills().service().calls(), 0, "gated pairs skip skill scoring");
}

#[tokio::test]
async fn test_unmapped_candidate_role_is_gated() {
    let aggregator = aggregator(DisabledSimilarity);
    let result = aggregator
        .aggregate(
            &job("Data Analyst", &["python"], 2),
            &candidate(5),
            Some(&interview("Underwater Basket Weaver", &[("python", 90.0)])),
        )
        .await;

    assert_eq!(result.score, 0);
    assert!(result.match_details[0].contains("underwater_basket_weaver"));
}

#[tokio::test]
async fn test_compatible_role_scores_fifty() {
    let aggregator = aggregator(DisabledSimilarity);
    let result = aggregator
        .aggregate(
            &job("Software Developer", &[], 0),
            &candidate(1),
            Some(&interview("Frontend Developer", &[])),
        )
        .await;

    assert_eq!(result.breakdown.role_score, 50);
    assert_eq!(result.breakdown.skill_score, 20);
    assert_eq!(result.breakdown.experience_score, 10);
    assert_eq!(result.score, 80);
    assert_eq!(result.algorithm_used(), Some(SkillAlgorithm::NoRequirements));
    assert_eq!(result.match_details[0], "Role: frontend_developer (compatible) -> 50/65");
}

#[tokio::test]
async fn test_compatibility_is_checked_from_job_role() {
    let aggregator = aggregator(DisabledSimilarity);
    let result = aggregator
        .aggregate(
            &job("Frontend Developer", &[], 0),
            &candidate(1),
            Some(&interview("Backend Developer", &[])),
        )
        .await;
    assert_eq!(result.score, 0);
}

#[tokio::test]
async fn test_breakdown_sums_to_score() {
    let aggregator = aggregator(DisabledSimilarity);
    let cases = [
        (vec!["python", "sql"], 3, 1, vec![("python", 40.0)]),
        (vec!["python"], 10, 0, vec![("python", 100.0)]),
        (vec!["excel", "tableau", "sql"], 2, 7, vec![("sql", 60.0), ("excel", 95.0)]),
        (vec![], 4, 2, vec![]),
    ];

    for (skills, required, years, held) in cases {
        let result = aggregator
            .aggregate(
                &job("Business Analyst", &skills, required),
                &candidate(years),
                Some(&interview("Data Analyst", &held)),
            )
            .await;
        assert_eq!(result.breakdown.total(), result.score);
        assert!(result.score <= 100);
    }
}

#[tokio::test]
async fn test_aggregate_is_idempotent() {
    let aggregator = aggregator(MockSimilarityService::new());
    let job = job("Data Analyst", &["python", "sql", "excel"], 4);
    let interview = interview("Data Analyst", &[("python", 70.0), ("excel", 88.0)]);

    let first = aggregator.aggregate(&job, &candidate(2), Some(&interview)).await;
    let second = aggregator.aggregate(&job, &candidate(2), Some(&interview)).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_skill_details_limited_to_three() {
    let aggregator = aggregator(DisabledSimilarity);
    let result = aggregator
        .aggregate(
            &job("Data Analyst", &["a1", "b2", "c3", "d4", "e5"], 0),
            &candidate(0),
            Some(&interview("Data Analyst", &[])),
        )
        .await;

    // role, skills summary, 3 skill lines, experience
    assert_eq!(result.match_details.len(), 6);
}

#[tokio::test]
async fn test_negative_experience_is_clamped() {
    let aggregator = aggregator(DisabledSimilarity);
    let result = aggregator
        .aggregate(
            &job("Data Analyst", &[], -4),
            &candidate(-2),
            Some(&interview("Data Analyst", &[])),
        )
        .await;

    assert_eq!(result.breakdown.experience_score, 10);
    assert!(result.match_details.last().is_some_and(|d| d.starts_with("Experience: 0/0")));
}

#[tokio::test]
async fn test_verified_flag_follows_profile_links() {
    let aggregator = aggregator(DisabledSimilarity);
    let mut unverified = candidate(3);
    unverified.github = None;

    let result = aggregator
        .aggregate(&job("Data Analyst", &[], 0), &unverified, None)
        .await;
    assert!(!result.verified);
}
