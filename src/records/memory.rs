use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{RecordError, RecordSource};
use crate::model::{Candidate, Interview, Job};

/// One job, its candidate pool and their interviews keyed by candidate id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRun {
    pub job: Job,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub interviews: HashMap<String, Interview>,
}

impl MatchRun {
    /// Interview stored for `candidate_id`.
    pub fn interview_for(&self, candidate_id: &str) -> Option<&Interview> {
        self.interviews.get(candidate_id)
    }
}

/// [`RecordSource`] over a single [`MatchRun`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecords {
    run: MatchRun,
}

impl InMemoryRecords {
    /// Serves lookups from `run`.
    pub fn new(run: MatchRun) -> Self {
        Self { run }
    }

    /// The backing document.
    pub fn run(&self) -> &MatchRun {
        &self.run
    }

    /// Returns the backing document.
    pub fn into_run(self) -> MatchRun {
        self.run
    }
}

impl From<MatchRun> for InMemoryRecords {
    fn from(run: MatchRun) -> Self {
        Self::new(run)
    }
}

impl RecordSource for InMemoryRecords {
    async fn job(&self, job_id: &str) -> Result<Job, RecordError> {
        if self.run.job.id == job_id {
            Ok(self.run.job.clone())
        } else {
            Err(RecordError::JobNotFound {
                job_id: job_id.to_string(),
            })
        }
    }

    async fn candidates(&self) -> Result<Vec<Candidate>, RecordError> {
        Ok(self.run.candidates.clone())
    }

    async fn interview_for(&self, candidate_id: &str) -> Result<Option<Interview>, RecordError> {
        Ok(self.run.interview_for(candidate_id).cloned())
    }
}
