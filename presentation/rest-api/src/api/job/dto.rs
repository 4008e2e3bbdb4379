use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::job::model::{GenerationJob, JobState};

use crate::api::autobiography::dto::AutobiographyResponse;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum JobStateDto {
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "processing")]
    Processing,
    #[oai(rename = "completed")]
    Completed,
    #[oai(rename = "failed")]
    Failed,
}

impl From<JobState> for JobStateDto {
    fn from(state: JobState) -> Self {
        match state {
            JobState::Pending => JobStateDto::Pending,
            JobState::Processing => JobStateDto::Processing,
            JobState::Completed => JobStateDto::Completed,
            JobState::Failed => JobStateDto::Failed,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct JobAcceptedResponse {
    /// Job identifier to poll with
    pub job_id: String,
    /// Initial job state
    pub state: JobStateDto,
    /// Where to look next
    pub message: String,
}

#[derive(Debug, Clone, Object)]
pub struct JobStatusResponse {
    /// Job identifier
    pub job_id: String,
    /// Current state
    pub state: JobStateDto,
    /// Progress (0-100)
    pub progress: u8,
    /// Finished autobiography, set once completed
    #[oai(skip_serializing_if_is_none)]
    pub result: Option<AutobiographyResponse>,
    /// Failure reason, set when failed
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
    /// Submission timestamp
    pub created_at: DateTime<Utc>,
    /// Last state change timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<GenerationJob> for JobStatusResponse {
    fn from(job: GenerationJob) -> Self {
        Self {
            job_id: job.id.to_string(),
            state: job.state.into(),
            progress: job.progress,
            result: job.result.map(|a| a.into()),
            error: job.error,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}
