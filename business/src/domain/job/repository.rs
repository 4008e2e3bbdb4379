use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::job::model::GenerationJob;

/// Port for storing and looking up generation jobs.
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<GenerationJob, RepositoryError>;
    async fn save(&self, job: &GenerationJob) -> Result<(), RepositoryError>;
}
