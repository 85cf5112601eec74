use serde::{Deserialize, Serialize};

use super::normalize_token;

/// How a job is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Remote,
    Hybrid,
    #[default]
    Onsite,
}

/// A job posting. Immutable for the duration of a matching run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    /// Free-text title; standardized into the job's role family.
    pub title: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default, alias = "experience")]
    pub required_experience_years: i32,
    #[serde(default)]
    pub work_mode: WorkMode,
}

impl Job {
    /// Required experience, with negative values clamped to zero.
    #[inline]
    pub fn required_years(&self) -> u32 {
        self.required_experience_years.max(0) as u32
    }

    /// Required skills, trimmed and lower-cased, with blank tokens dropped.
    pub fn skill_tokens(&self) -> Vec<String> {
        self.required_skills
            .iter()
            .map(|s| normalize_token(s))
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// A candidate in the pool. Role and skills come from their interview.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    #[serde(default)]
    pub experience_years: i32,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

impl Candidate {
    /// Experience, with negative values clamped to zero.
    #[inline]
    pub fn years(&self) -> u32 {
        self.experience_years.max(0) as u32
    }

    /// A candidate counts as verified when a LinkedIn or GitHub profile is linked.
    pub fn is_verified(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.linkedin) || present(&self.github)
    }
}
