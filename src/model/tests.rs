use super::*;

fn skill(token: &str, display: &str, score: f64, synonyms: &[&str]) -> VerifiedSkill {
    VerifiedSkill {
        skill: token.to_string(),
        display_name: display.to_string(),
        score,
        synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        category: SkillCategory::General,
    }
}

#[test]
fn test_job_deserializes_experience_alias_and_defaults() {
    let job: Job = serde_json::from_str(
        r#"{"id":"j1","title":"Data Analyst","required_skills":["SQL"],"experience":3}"#,
    )
    .expect("job should parse");

    assert_eq!(job.required_experience_years, 3);
    assert_eq!(job.work_mode, WorkMode::Onsite);
}

#[test]
fn test_job_skill_tokens_normalize_and_drop_blanks() {
    let job = Job {
        id: "j".into(),
        title: "t".into(),
        required_skills: vec![" Python ".into(), "".into(), "  ".into(), "SQL".into()],
        required_experience_years: 0,
        work_mode: WorkMode::Remote,
    };

    assert_eq!(job.skill_tokens(), vec!["python", "sql"]);
}

#[test]
fn test_negative_years_clamp_to_zero() {
    let candidate = Candidate {
        id: "c".into(),
        experience_years: -4,
        linkedin: None,
        github: None,
    };
    assert_eq!(candidate.years(), 0);

    let job = Job {
        id: "j".into(),
        title: "t".into(),
        required_skills: vec![],
        required_experience_years: -1,
        work_mode: WorkMode::Hybrid,
    };
    assert_eq!(job.required_years(), 0);
}

#[test]
fn test_candidate_verified_requires_non_blank_profile() {
    let mut candidate = Candidate {
        id: "c".into(),
        experience_years: 1,
        linkedin: Some("  ".into()),
        github: None,
    };
    assert!(!candidate.is_verified());

    candidate.github = Some("https://github.com/someone".into());
    assert!(candidate.is_verified());
}

#[test]
fn test_unknown_skill_category_reads_as_general() {
    let parsed: VerifiedSkill = serde_json::from_str(
        r#"{"skill":"x","display_name":"X","score":50,"category":"underwater_basketry"}"#,
    )
    .expect("skill should parse");
    assert_eq!(parsed.category, SkillCategory::General);

    let parsed: VerifiedSkill = serde_json::from_str(
        r#"{"skill":"sql","display_name":"SQL","score":50,"category":"programming_languages"}"#,
    )
    .expect("skill should parse");
    assert_eq!(parsed.category, SkillCategory::ProgrammingLanguages);
}

#[test]
fn test_proficiency_clamps() {
    assert_eq!(skill("a", "A", 140.0, &[]).proficiency(), 100.0);
    assert_eq!(skill("a", "A", -3.0, &[]).proficiency(), 0.0);
    assert_eq!(skill("a", "A", f64::NAN, &[]).proficiency(), 0.0);
    assert_eq!(skill("a", "A", 72.5, &[]).proficiency(), 72.5);
}

#[test]
fn test_direct_match_forms() {
    let s = skill("power_bi", "Power BI", 80.0, &[]);
    assert!(s.matches_directly("power_bi"));
    assert!(s.matches_directly("power bi"));
    assert!(!s.matches_directly("power"));
}

#[test]
fn test_synonym_match_is_containment_and_ignores_blanks() {
    let s = skill("sql", "SQL", 80.0, &["", "structured query language"]);
    assert!(s.matches_synonym("query language"));
    assert!(s.matches_synonym("structured query language basics"));
    assert!(!s.matches_synonym("python"));
}

#[test]
fn test_interview_role_text_filters_blank() {
    let mut interview = Interview {
        id: "i".into(),
        role: Some("   ".into()),
        ..Default::default()
    };
    assert_eq!(interview.role_text(), None);

    interview.role = Some(" Data Analyst ".into());
    assert_eq!(interview.role_text(), Some("Data Analyst"));
}

#[test]
fn test_compatibility_levels() {
    assert_eq!(CompatibilityLevel::from_score(100), CompatibilityLevel::Excellent);
    assert_eq!(CompatibilityLevel::from_score(80), CompatibilityLevel::Excellent);
    assert_eq!(CompatibilityLevel::from_score(79), CompatibilityLevel::VeryGood);
    assert_eq!(CompatibilityLevel::from_score(65), CompatibilityLevel::VeryGood);
    assert_eq!(CompatibilityLevel::from_score(50), CompatibilityLevel::Good);
    assert_eq!(CompatibilityLevel::from_score(35), CompatibilityLevel::Fair);
    assert_eq!(CompatibilityLevel::from_score(0), CompatibilityLevel::Low);
}

#[test]
fn test_breakdown_total() {
    let breakdown = MatchBreakdown {
        role_score: 65,
        skill_score: 13,
        experience_score: 10,
        algorithm_used: Some(SkillAlgorithm::VerifiedOverlap),
    };
    assert_eq!(breakdown.total(), 88);
}
