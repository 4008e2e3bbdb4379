use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::autobiography::use_cases::generate::{
    GenerateAutobiographyParams, GenerateAutobiographyUseCase, MIN_TRANSCRIPT_CHARS,
};
use crate::domain::job::errors::JobError;
use crate::domain::job::model::GenerationJob;
use crate::domain::job::repository::JobRepository;
use crate::domain::job::use_cases::submit::{SubmitGenerationJobParams, SubmitGenerationJobUseCase};
use crate::domain::logger::Logger;

pub struct SubmitGenerationJobUseCaseImpl {
    pub repository: Arc<dyn JobRepository>,
    pub generator: Arc<dyn GenerateAutobiographyUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitGenerationJobUseCase for SubmitGenerationJobUseCaseImpl {
    async fn execute(
        &self,
        params: SubmitGenerationJobParams,
    ) -> Result<GenerationJob, JobError> {
        // Validated before a job record exists, so a rejected transcript
        // never leaves a Pending orphan behind.
        if params.transcript.trim().chars().count() < MIN_TRANSCRIPT_CHARS {
            return Err(JobError::TranscriptTooShort);
        }

        let job = GenerationJob::new();
        self.repository.save(&job).await?;

        self.logger
            .info(&format!("Generation job {} submitted", job.id));

        let repository = self.repository.clone();
        let generator = self.generator.clone();
        let logger = self.logger.clone();
        let job_id = job.id;
        let transcript = params.transcript;

        tokio::spawn(async move {
            run_generation_job(job_id, transcript, repository, generator, logger).await;
        });

        Ok(job)
    }
}

/// Drives a submitted job to a terminal state.
///
/// Every failure is recorded on the job record; nothing escapes the task.
pub async fn run_generation_job(
    job_id: Uuid,
    transcript: String,
    repository: Arc<dyn JobRepository>,
    generator: Arc<dyn GenerateAutobiographyUseCase>,
    logger: Arc<dyn Logger>,
) {
    let mut job = match repository.get_by_id(job_id).await {
        Ok(job) => job,
        Err(err) => {
            logger.error(&format!("Job {} disappeared before it ran: {}", job_id, err));
            return;
        }
    };

    if job.start_processing().is_err() {
        logger.warn(&format!("Job {} was not pending, skipping", job_id));
        return;
    }
    if let Err(err) = repository.save(&job).await {
        logger.error(&format!("Failed to mark job {} processing: {}", job_id, err));
        return;
    }

    match generator
        .execute(GenerateAutobiographyParams { transcript })
        .await
    {
        Ok(autobiography) => {
            if job.complete(autobiography).is_err() {
                logger.warn(&format!("Job {} already terminal, dropping result", job_id));
                return;
            }
            logger.info(&format!("Generation job {} completed", job_id));
        }
        Err(err) => {
            logger.warn(&format!("Generation job {} failed: {}", job_id, err));
            job.fail(err.to_string());
        }
    }

    if let Err(err) = repository.save(&job).await {
        logger.error(&format!(
            "Failed to persist final state of job {}: {}",
            job_id, err
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::autobiography::errors::AutobiographyError;
    use crate::domain::autobiography::model::{Autobiography, Chapter, create_autobiography};
    use crate::domain::autobiography::value_objects::LifeStage;
    use crate::domain::errors::RepositoryError;
    use crate::domain::job::model::JobState;
    use mockall::mock;

    mock! {
        pub JobRepo {}

        #[async_trait]
        impl JobRepository for JobRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<GenerationJob, RepositoryError>;
            async fn save(&self, job: &GenerationJob) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Generator {}

        #[async_trait]
        impl GenerateAutobiographyUseCase for Generator {
            async fn execute(
                &self,
                params: GenerateAutobiographyParams,
            ) -> Result<Autobiography, AutobiographyError>;
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

    fn long_transcript() -> String {
        "I was born in 1952 in a small village by the river, the third of five children. "
            .repeat(3)
    }

    fn sample_autobiography() -> Autobiography {
        create_autobiography(
            "A Long Road Home".to_string(),
            "Kim Younghee".to_string(),
            "Prologue.".to_string(),
            vec![Chapter {
                stage: LifeStage::Childhood,
                title: "The river".to_string(),
                content: "...".to_string(),
            }],
            "Epilogue.".to_string(),
            vec![],
            vec![],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_pending_job_on_submission() {
        let mut repository = MockJobRepo::new();
        repository
            .expect_save()
            .withf(|job| job.state == JobState::Pending)
            .returning(|_| Ok(()));
        // The spawned task may or may not get polled before the test ends.
        repository
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let generator = MockGenerator::new();

        let use_case = SubmitGenerationJobUseCaseImpl {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SubmitGenerationJobParams {
                transcript: long_transcript(),
            })
            .await;

        assert!(result.is_ok());
        let job = result.unwrap();
        assert_eq!(job.state, JobState::Pending);
        assert_eq!(job.progress, 0);
    }

    #[tokio::test]
    async fn should_reject_short_transcript_without_creating_a_job() {
        let repository = MockJobRepo::new();
        let generator = MockGenerator::new();

        let use_case = SubmitGenerationJobUseCaseImpl {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SubmitGenerationJobParams {
                transcript: "Too short.".to_string(),
            })
            .await;

        assert!(matches!(result, Err(JobError::TranscriptTooShort)));
    }

    #[tokio::test]
    async fn should_complete_job_when_generation_succeeds() {
        let job = GenerationJob::new();
        let job_id = job.id;

        let mut repository = MockJobRepo::new();
        repository
            .expect_get_by_id()
            .returning(move |_| Ok(job.clone()));
        repository
            .expect_save()
            .withf(|job| job.state == JobState::Processing && job.progress == 10)
            .times(1)
            .returning(|_| Ok(()));
        repository
            .expect_save()
            .withf(|job| {
                job.state == JobState::Completed && job.progress == 100 && job.result.is_some()
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut generator = MockGenerator::new();
        generator
            .expect_execute()
            .returning(|_| Ok(sample_autobiography()));

        run_generation_job(
            job_id,
            long_transcript(),
            Arc::new(repository),
            Arc::new(generator),
            mock_logger(),
        )
        .await;
    }

    #[tokio::test]
    async fn should_record_failure_when_generation_fails() {
        let job = GenerationJob::new();
        let job_id = job.id;

        let mut repository = MockJobRepo::new();
        repository
            .expect_get_by_id()
            .returning(move |_| Ok(job.clone()));
        repository
            .expect_save()
            .withf(|job| job.state == JobState::Processing)
            .times(1)
            .returning(|_| Ok(()));
        repository
            .expect_save()
            .withf(|job| {
                job.state == JobState::Failed
                    && job.error.as_deref() == Some("autobiography.generation_failed")
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut generator = MockGenerator::new();
        generator
            .expect_execute()
            .returning(|_| Err(AutobiographyError::GenerationFailed));

        run_generation_job(
            job_id,
            long_transcript(),
            Arc::new(repository),
            Arc::new(generator),
            mock_logger(),
        )
        .await;
    }
}
