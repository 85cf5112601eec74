//! Record builders shared by integration tests.

use std::collections::HashMap;

use talentmatch::model::{
    Candidate, EnhancedSkills, Interview, Job, SkillCategory, VerifiedSkill, WorkMode,
};
use talentmatch::records::MatchRun;

pub const JOB_ID: &str = "job-analyst";

pub fn analyst_job(skills: &[&str], years: i32) -> Job {
    Job {
        id: JOB_ID.to_string(),
        title: "Data Analyst".to_string(),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        required_experience_years: years,
        work_mode: WorkMode::Remote,
    }
}

pub fn verified(token: &str, score: f64) -> VerifiedSkill {
    VerifiedSkill {
        skill: token.to_string(),
        display_name: token.replace('_', " "),
        score,
        synonyms: Vec::new(),
        category: SkillCategory::General,
    }
}

#[derive(Default)]
pub struct CandidateBuilder {
    id: String,
    years: i32,
    github: Option<String>,
    role: Option<String>,
    skills: Option<Vec<VerifiedSkill>>,
    keywords: Vec<String>,
}

impl CandidateBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    pub fn years(mut self, years: i32) -> Self {
        self.years = years;
        self
    }

    pub fn github(mut self, url: &str) -> Self {
        self.github = Some(url.to_string());
        self
    }

    pub fn role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    pub fn skill(mut self, token: &str, score: f64) -> Self {
        self.skills
            .get_or_insert_with(Vec::new)
            .push(verified(token, score));
        self
    }

    pub fn keyword(mut self, keyword: &str) -> Self {
        self.keywords.push(keyword.to_string());
        self
    }

    /// Returns the candidate and, if a role was set, its interview.
    pub fn build(self) -> (Candidate, Option<Interview>) {
        let candidate = Candidate {
            id: self.id.clone(),
            experience_years: self.years,
            linkedin: None,
            github: self.github,
        };
        let interview = self.role.map(|role| Interview {
            id: format!("iv-{}", self.id),
            role: Some(role),
            enhanced_skills: self.skills.map(EnhancedSkills::new),
            matching_keywords: self.keywords,
            ..Default::default()
        });
        (candidate, interview)
    }
}

pub fn match_run(job: Job, builders: Vec<CandidateBuilder>) -> MatchRun {
    let mut candidates = Vec::with_capacity(builders.len());
    let mut interviews = HashMap::new();
    for builder in builders {
        let (candidate, interview) = builder.build();
        if let Some(interview) = interview {
            interviews.insert(candidate.id.clone(), interview);
        }
        candidates.push(candidate);
    }
    MatchRun {
        job,
        candidates,
        interviews,
    }
}
