use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::job::errors::JobError;
use crate::domain::job::model::GenerationJob;

pub struct GetJobStatusParams {
    pub job_id: Uuid,
}

#[async_trait]
pub trait GetJobStatusUseCase: Send + Sync {
    async fn execute(&self, params: GetJobStatusParams) -> Result<GenerationJob, JobError>;
}
