use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::JobError;
use crate::domain::autobiography::model::Autobiography;

/// Lifecycle states of a generation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl JobState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed | JobState::Failed)
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobState::Pending => write!(f, "pending"),
            JobState::Processing => write!(f, "processing"),
            JobState::Completed => write!(f, "completed"),
            JobState::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for JobState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(JobState::Pending),
            "processing" => Ok(JobState::Processing),
            "completed" => Ok(JobState::Completed),
            "failed" => Ok(JobState::Failed),
            _ => Err(format!("Invalid job state: {}", s)),
        }
    }
}

/// A background autobiography-generation job.
///
/// Invariant: a spawned job always reaches a terminal state; `result` is
/// only set on Completed and `error` only on Failed.
#[derive(Debug, Clone)]
pub struct GenerationJob {
    pub id: Uuid,
    pub state: JobState,
    pub progress: u8,
    pub result: Option<Autobiography>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GenerationJob {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            state: JobState::Pending,
            progress: 0,
            result: None,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn start_processing(&mut self) -> Result<(), JobError> {
        if self.state != JobState::Pending {
            return Err(JobError::InvalidTransition);
        }
        self.state = JobState::Processing;
        self.progress = 10;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn complete(&mut self, result: Autobiography) -> Result<(), JobError> {
        if self.state != JobState::Processing {
            return Err(JobError::InvalidTransition);
        }
        self.state = JobState::Completed;
        self.progress = 100;
        self.result = Some(result);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Failure is recorded from any non-terminal state.
    pub fn fail(&mut self, error: String) {
        if self.state.is_terminal() {
            return;
        }
        self.state = JobState::Failed;
        self.error = Some(error);
        self.updated_at = Utc::now();
    }
}

impl Default for GenerationJob {
    fn default() -> Self {
        Self::new()
    }
}
