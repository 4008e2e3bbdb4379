use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::job::model::GenerationJob;
use business::domain::job::repository::JobRepository;

/// Process-local job store.
///
/// Jobs live for the lifetime of the process. A deployment that needs
/// durable or shared jobs swaps this adapter for one backed by an
/// external store; the port stays the same.
pub struct JobRepositoryInMemory {
    jobs: RwLock<HashMap<Uuid, GenerationJob>>,
}

impl JobRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for JobRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobRepository for JobRepositoryInMemory {
    async fn get_by_id(&self, id: Uuid) -> Result<GenerationJob, RepositoryError> {
        let jobs = self.jobs.read().map_err(|_| RepositoryError::Persistence)?;
        jobs.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, job: &GenerationJob) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().map_err(|_| RepositoryError::Persistence)?;
        jobs.insert(job.id, job.clone());
        Ok(())
    }
}
