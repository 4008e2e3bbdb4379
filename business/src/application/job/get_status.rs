use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::job::errors::JobError;
use crate::domain::job::model::GenerationJob;
use crate::domain::job::repository::JobRepository;
use crate::domain::job::use_cases::get_status::{GetJobStatusParams, GetJobStatusUseCase};
use crate::domain::logger::Logger;

pub struct GetJobStatusUseCaseImpl {
    pub repository: Arc<dyn JobRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetJobStatusUseCase for GetJobStatusUseCaseImpl {
    async fn execute(&self, params: GetJobStatusParams) -> Result<GenerationJob, JobError> {
        self.logger
            .debug(&format!("Fetching status of job {}", params.job_id));

        let job = self
            .repository
            .get_by_id(params.job_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => JobError::NotFound,
                other => JobError::Repository(other),
            })?;

        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub JobRepo {}

        #[async_trait]
        impl JobRepository for JobRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<GenerationJob, RepositoryError>;
            async fn save(&self, job: &GenerationJob) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_job_when_it_exists() {
        let job = GenerationJob::new();
        let job_id = job.id;

        let mut repository = MockJobRepo::new();
        repository
            .expect_get_by_id()
            .withf(move |id| *id == job_id)
            .returning(move |_| Ok(job.clone()));

        let use_case = GetJobStatusUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetJobStatusParams { job_id }).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, job_id);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_job() {
        let mut repository = MockJobRepo::new();
        repository
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetJobStatusUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetJobStatusParams {
                job_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result, Err(JobError::NotFound)));
    }
}
