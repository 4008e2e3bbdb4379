use async_trait::async_trait;

use crate::domain::job::errors::JobError;
use crate::domain::job::model::GenerationJob;

pub struct SubmitGenerationJobParams {
    pub transcript: String,
}

#[async_trait]
pub trait SubmitGenerationJobUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SubmitGenerationJobParams,
    ) -> Result<GenerationJob, JobError>;
}
