use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::autobiography::errors::AutobiographyError;
use crate::domain::autobiography::services::{ManuscriptArchiveService, SavedManuscript};
use crate::domain::autobiography::use_cases::archive::{
    ArchiveAutobiographyParams, ArchiveAutobiographyUseCase,
};
use crate::domain::autobiography::value_objects::ManuscriptFormat;
use crate::domain::logger::Logger;

pub struct ArchiveAutobiographyUseCaseImpl {
    pub archive: Arc<dyn ManuscriptArchiveService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ArchiveAutobiographyUseCase for ArchiveAutobiographyUseCaseImpl {
    async fn execute(
        &self,
        params: ArchiveAutobiographyParams,
    ) -> Result<Vec<SavedManuscript>, AutobiographyError> {
        // An empty selector means "everything".
        let formats = if params.formats.is_empty() {
            ManuscriptFormat::ALL.to_vec()
        } else {
            params.formats
        };

        self.logger.info(&format!(
            "Archiving \"{}\" in {} format(s)",
            params.autobiography.title,
            formats.len()
        ));

        let saved = self.archive.save(&params.autobiography, &formats).await?;

        self.logger
            .info(&format!("Archived {} manuscript file(s)", saved.len()));

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::autobiography::model::{Autobiography, Chapter, create_autobiography};
    use crate::domain::autobiography::value_objects::LifeStage;
    use mockall::mock;

    mock! {
        pub Archive {}

        #[async_trait]
        impl ManuscriptArchiveService for Archive {
            async fn save(
                &self,
                autobiography: &Autobiography,
                formats: &[ManuscriptFormat],
            ) -> Result<Vec<SavedManuscript>, AutobiographyError>;
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
    async fn should_archive_requested_formats() {
        let mut archive = MockArchive::new();
        archive
            .expect_save()
            .withf(|_, formats| formats.len() == 1 && formats[0] == ManuscriptFormat::Markdown)
            .returning(|_, _| {
                Ok(vec![SavedManuscript {
                    format: ManuscriptFormat::Markdown,
                    path: "./output/kim_autobiography.md".to_string(),
                }])
            });

        let use_case = ArchiveAutobiographyUseCaseImpl {
            archive: Arc::new(archive),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ArchiveAutobiographyParams {
                autobiography: sample_autobiography(),
                formats: vec![ManuscriptFormat::Markdown],
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_default_to_all_formats_when_none_requested() {
        let mut archive = MockArchive::new();
        archive
            .expect_save()
            .withf(|_, formats| formats.len() == 3 && formats[0] == ManuscriptFormat::Markdown)
            .returning(|_, formats| {
                Ok(formats
                    .iter()
                    .map(|f| SavedManuscript {
                        format: *f,
                        path: format!("./output/kim_autobiography.{}", f.extension()),
                    })
                    .collect())
            });

        let use_case = ArchiveAutobiographyUseCaseImpl {
            archive: Arc::new(archive),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ArchiveAutobiographyParams {
                autobiography: sample_autobiography(),
                formats: vec![],
            })
            .await;

        assert_eq!(result.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn should_propagate_archive_failure() {
        let mut archive = MockArchive::new();
        archive
            .expect_save()
            .returning(|_, _| Err(AutobiographyError::ArchiveFailed));

        let use_case = ArchiveAutobiographyUseCaseImpl {
            archive: Arc::new(archive),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ArchiveAutobiographyParams {
                autobiography: sample_autobiography(),
                formats: vec![],
            })
            .await;

        assert!(matches!(result, Err(AutobiographyError::ArchiveFailed)));
    }
}
