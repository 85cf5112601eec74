use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::*;
use crate::cache::MatchCaches;
use crate::diagnostics::Diagnostics;
use crate::engine::MatchEngine;
use crate::model::{EnhancedSkills, SkillAlgorithm, SkillCategory, VerifiedSkill, WorkMode};
use crate::records::InMemoryRecords;
use crate::similarity::MockSimilarityService;

fn job() -> Job {
    Job {
        id: "job-1".into(),
        title: "Data Analyst".into(),
        required_skills: vec!["python".into(), "sql".into()],
        required_experience_years: 3,
        work_mode: WorkMode::Onsite,
    }
}

fn pool(n: usize) -> (Vec<Candidate>, HashMap<String, Interview>) {
    let mut candidates = Vec::with_capacity(n);
    let mut interviews = HashMap::new();
    for i in 0..n {
        let id = format!("c{i}");
        candidates.push(Candidate {
            id: id.clone(),
            experience_years: (i % 6) as i32,
            ..Default::default()
        });
        if i % 4 == 3 {
            continue;
        }
        let role = if i % 5 == 4 { "Sales Manager" } else { "Business Analyst" };
        let token = if i % 2 == 0 { "python" } else { "sql" };
        interviews.insert(
            id.clone(),
            Interview {
                id: format!("iv{i}"),
                role: Some(role.into()),
                enhanced_skills: Some(EnhancedSkills::new(vec![VerifiedSkill {
                    skill: token.into(),
                    display_name: token.into(),
                    score: 50.0 + i as f64,
                    synonyms: vec![],
                    category: SkillCategory::General,
                }])),
                ..Default::default()
            },
        );
    }
    (candidates, interviews)
}

fn controller(
    service: MockSimilarityService,
    config: BatchConfig,
) -> BatchController<MockSimilarityService> {
    let engine = MatchEngine::new(
        service,
        Arc::new(MatchCaches::default()),
        Arc::new(Diagnostics::new()),
    );
    BatchController::new(MatchEngineHandle::new(engine), config)
}

#[tokio::test]
async fn test_results_follow_input_order() {
    let (candidates, interviews) = pool(12);
    let controller = controller(
        MockSimilarityService::new(),
        BatchConfig::new(5, Duration::ZERO),
    );

    let results = controller.match_pool(&job(), &candidates, &interviews).await;

    let ids: Vec<&str> = results.iter().map(|r| r.candidate_id.as_str()).collect();
    let expected: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_results_independent_of_chunk_size() {
    let (candidates, interviews) = pool(23);
    let mut runs = Vec::new();
    for chunk_size in [1, 4, 7, 50] {
        let controller = controller(
            MockSimilarityService::new(),
            BatchConfig::new(chunk_size, Duration::ZERO),
        );
        runs.push(controller.match_pool(&job(), &candidates, &interviews).await);
    }

    for run in &runs[1..] {
        assert_eq!(run, &runs[0]);
    }
}

#[tokio::test]
async fn test_pairs_within_chunk_run_concurrently() {
    let (candidates, interviews) = pool(8);
    let with_skills = interviews
        .values()
        .filter(|i| i.role.as_deref() == Some("Business Analyst"))
        .count();
    let controller = controller(
        MockSimilarityService::new().with_delay(Duration::from_millis(20)),
        BatchConfig::new(50, Duration::ZERO),
    );

    controller.match_pool(&job(), &candidates, &interviews).await;

    let service = controller.engine().aggregator().skills().service();
    assert_eq!(service.calls(), with_skills);
    assert_eq!(service.peak_in_flight(), with_skills);
}

#[tokio::test]
async fn test_chunks_run_sequentially() {
    let (candidates, interviews) = pool(9);
    let controller = controller(
        MockSimilarityService::new().with_delay(Duration::from_millis(10)),
        BatchConfig::new(2, Duration::ZERO),
    );

    controller.match_pool(&job(), &candidates, &interviews).await;

    let service = controller.engine().aggregator().skills().service();
    assert!(service.peak_in_flight() <= 2);
}

#[tokio::test]
async fn test_delay_only_between_chunks() {
    let (candidates, interviews) = pool(6);
    let delay = Duration::from_millis(30);

    let chunked = controller(MockSimilarityService::new(), BatchConfig::new(2, delay));
    let started = Instant::now();
    chunked.match_pool(&job(), &candidates, &interviews).await;
    assert!(started.elapsed() >= delay * 2, "three chunks wait twice");

    let single = controller(
        MockSimilarityService::new(),
        BatchConfig::new(50, Duration::from_secs(30)),
    );
    let started = Instant::now();
    single.match_pool(&job(), &candidates, &interviews).await;
    assert!(started.elapsed() < Duration::from_secs(5), "no delay after the last chunk");
}

#[tokio::test]
async fn test_single_failure_does_not_abort_run() {
    let (candidates, interviews) = pool(8);
    let controller = controller(
        MockSimilarityService::new().fail_for_skill("sql"),
        BatchConfig::new(3, Duration::ZERO),
    );

    let results = controller.match_pool(&job(), &candidates, &interviews).await;

    assert_eq!(results.len(), candidates.len());
    let algorithms: Vec<Option<SkillAlgorithm>> =
        results.iter().map(|r| r.algorithm_used()).collect();
    assert!(algorithms.contains(&Some(SkillAlgorithm::ExternalSimilarity)));
    assert!(algorithms.contains(&Some(SkillAlgorithm::VerifiedOverlap)));
    assert!(controller.engine().diagnostics().external_failures() > 0);
}

#[tokio::test]
async fn test_warm_cache_across_runs() {
    let (candidates, interviews) = pool(10);
    let controller = controller(
        MockSimilarityService::new(),
        BatchConfig::new(4, Duration::ZERO),
    );

    let first = controller.match_pool(&job(), &candidates, &interviews).await;
    let calls = controller.engine().aggregator().skills().service().calls();
    let second = controller.match_pool(&job(), &candidates, &interviews).await;

    assert_eq!(first, second);
    assert_eq!(controller.engine().aggregator().skills().service().calls(), calls);
    let snapshot = controller.engine().snapshot();
    assert_eq!(snapshot.runs, 2);
    assert_eq!(snapshot.result_cache_hits, 10);
}

#[tokio::test]
async fn test_empty_pool() {
    let controller = controller(
        MockSimilarityService::new(),
        BatchConfig::new(0, Duration::from_secs(30)),
    );
    let results = controller.match_pool(&job(), &[], &HashMap::new()).await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_match_job_loads_records() {
    let (candidates, interviews) = pool(5);
    let run = MatchRun {
        job: job(),
        candidates,
        interviews,
    };
    let controller = controller(
        MockSimilarityService::new(),
        BatchConfig::new(2, Duration::ZERO),
    );

    let via_source = controller
        .match_job("job-1", &InMemoryRecords::new(run.clone()))
        .await
        .expect("job exists");
    let direct = controller.match_run(&run).await;

    assert_eq!(via_source, direct);
    assert_eq!(via_source.len(), 5);
}

#[tokio::test]
async fn test_match_job_unknown_job() {
    let (candidates, interviews) = pool(3);
    let records = InMemoryRecords::new(MatchRun {
        job: job(),
        candidates,
        interviews,
    });
    let controller = controller(
        MockSimilarityService::new(),
        BatchConfig::default(),
    );

    let err = controller
        .match_job("job-404", &records)
        .await
        .expect_err("unknown job");
    assert!(matches!(err, RecordError::JobNotFound { .. }));
    assert_eq!(controller.engine().diagnostics().evaluations(), 0);
}

fn scored(candidate_id: &str, score: u32) -> MatchResult {
    MatchResult {
        job_id: "job-1".into(),
        candidate_id: candidate_id.into(),
        score,
        match_details: vec![],
        breakdown: Default::default(),
        compatibility: crate::model::CompatibilityLevel::from_score(score),
        has_interview: true,
        verified: false,
    }
}

fn ids(results: &[MatchResult]) -> Vec<&str> {
    results.iter().map(|r| r.candidate_id.as_str()).collect()
}

#[test]
fn test_rank_matches_orders_and_filters() {
    let results = vec![
        scored("a", 40),
        scored("b", 0),
        scored("c", 88),
        scored("d", 20),
        scored("e", 40),
    ];

    assert_eq!(ids(&rank_matches(results.clone(), 1, 10)), ["c", "a", "e", "d"]);
    assert_eq!(ids(&rank_matches(results.clone(), 25, 10)), ["c", "a", "e"]);
    assert_eq!(ids(&rank_matches(results.clone(), 0, 2)), ["c", "a"]);
    assert!(rank_matches(results, 1, 0).is_empty());
}

#[tokio::test]
async fn test_shortlist_keeps_top_compatible_candidates() {
    let (candidates, interviews) = pool(30);
    let controller = controller(
        MockSimilarityService::new(),
        BatchConfig::new(8, Duration::ZERO),
    );

    let shortlist = controller.shortlist(&job(), &candidates, &interviews).await;
    let all = controller.match_pool(&job(), &candidates, &interviews).await;

    let compatible = all.iter().filter(|r| r.score > 0).count();
    assert_eq!(shortlist.len(), compatible.min(crate::constants::SHORTLIST_LIMIT));
    assert!(shortlist.iter().all(|r| r.score > 0));
    assert!(shortlist.windows(2).all(|w| w[0].score >= w[1].score));
    let best = all.iter().map(|r| r.score).max();
    assert_eq!(shortlist.first().map(|r| r.score), best);
}

#[tokio::test]
async fn test_recommend_jobs_ranks_compatible_jobs() {
    let controller = controller(
        MockSimilarityService::new(),
        BatchConfig::new(2, Duration::ZERO),
    );
    let candidate = Candidate {
        id: "c-rec".into(),
        experience_years: 4,
        ..Default::default()
    };
    let (_, interviews) = pool(1);
    let interview = interviews.get("c0").cloned().map(|mut i| {
        i.id = "iv-rec".into();
        i
    });

    let mut data_job = job();
    data_job.id = "job-data".into();
    let mut business_job = job();
    business_job.id = "job-business".into();
    business_job.title = "Business Analyst".into();
    let mut sales_job = job();
    sales_job.id = "job-sales".into();
    sales_job.title = "Sales Manager".into();
    let jobs = vec![data_job.clone(), sales_job, business_job];

    let recommended = controller
        .recommend_jobs(&candidate, interview.as_ref(), &jobs, 10)
        .await;
    let job_ids: Vec<&str> = recommended.iter().map(|r| r.job_id.as_str()).collect();
    assert_eq!(job_ids, ["job-business", "job-data"]);
    assert!(recommended.iter().all(|r| r.score >= RECOMMENDATION_MIN_SCORE));

    let limited = controller
        .recommend_jobs(&candidate, interview.as_ref(), &jobs, 1)
        .await;
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].job_id, "job-business");

    let evaluations = controller.engine().diagnostics().evaluations();
    let interviews = HashMap::from([(candidate.id.clone(), interview.clone().unwrap_or_default())]);
    controller
        .match_pool(&data_job, std::slice::from_ref(&candidate), &interviews)
        .await;
    assert_eq!(
        controller.engine().diagnostics().evaluations(),
        evaluations,
        "pair already scored for the recommendation"
    );
}
