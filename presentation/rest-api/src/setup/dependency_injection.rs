use std::sync::Arc;

use logger::TracingLogger;
use storage::job::repository::JobRepositoryInMemory;
use storage::manuscript::archive::ManuscriptArchiveFs;

use openai::chapter_writer::ChapterWriterOpenAI;
use openai::client::OpenAIClient;
use openai::composer::AutobiographyComposerOpenAI;
use openai::transcriber::WhisperTranscriberOpenAI;
use openai::transcript_analyzer::TranscriptAnalyzerOpenAI;

use business::application::autobiography::archive::ArchiveAutobiographyUseCaseImpl;
use business::application::autobiography::generate::GenerateAutobiographyUseCaseImpl;
use business::application::job::get_status::GetJobStatusUseCaseImpl;
use business::application::job::submit::SubmitGenerationJobUseCaseImpl;
use business::application::transcription::transcribe::TranscribeAudioUseCaseImpl;
use business::domain::autobiography::use_cases::generate::GenerateAutobiographyUseCase;

use crate::config::archive_config::ArchiveConfig;
use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub autobiography_api: crate::api::autobiography::routes::AutobiographyApi,
    pub job_api: crate::api::job::routes::JobApi,
    pub transcription_api: crate::api::transcription::routes::TranscriptionApi,
}

impl DependencyContainer {
    pub fn new() -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let openai_config = OpenAIConfig::from_env();
        let archive_config = ArchiveConfig::from_env();

        let analyzer_client =
            OpenAIClient::new(openai_config.api_key.clone(), openai_config.model.clone());
        let writer_client =
            OpenAIClient::new(openai_config.api_key.clone(), openai_config.model.clone());
        let composer_client =
            OpenAIClient::new(openai_config.api_key.clone(), openai_config.model.clone());
        let transcriber_client = OpenAIClient::new(openai_config.api_key, openai_config.model);

        let analyzer = Arc::new(TranscriptAnalyzerOpenAI::new(analyzer_client));
        let writer = Arc::new(ChapterWriterOpenAI::new(writer_client));
        let composer = Arc::new(AutobiographyComposerOpenAI::new(composer_client));
        let transcriber = Arc::new(WhisperTranscriberOpenAI::new(transcriber_client));

        let job_repository = Arc::new(JobRepositoryInMemory::new());
        let archive = Arc::new(ManuscriptArchiveFs::new(archive_config.output_dir));

        // Autobiography use cases
        let generate_use_case: Arc<dyn GenerateAutobiographyUseCase> =
            Arc::new(GenerateAutobiographyUseCaseImpl {
                analyzer,
                writer,
                composer,
                logger: logger.clone(),
            });
        let archive_use_case = Arc::new(ArchiveAutobiographyUseCaseImpl {
            archive,
            logger: logger.clone(),
        });

        // Job use cases
        let submit_use_case = Arc::new(SubmitGenerationJobUseCaseImpl {
            repository: job_repository.clone(),
            generator: generate_use_case.clone(),
            logger: logger.clone(),
        });
        let get_status_use_case = Arc::new(GetJobStatusUseCaseImpl {
            repository: job_repository,
            logger: logger.clone(),
        });

        // Transcription use cases
        let transcribe_use_case = Arc::new(TranscribeAudioUseCaseImpl {
            transcriber,
            logger,
        });

        let autobiography_api = crate::api::autobiography::routes::AutobiographyApi::new(
            generate_use_case,
            submit_use_case,
            archive_use_case,
        );

        let job_api = crate::api::job::routes::JobApi::new(get_status_use_case);

        let transcription_api =
            crate::api::transcription::routes::TranscriptionApi::new(transcribe_use_case);

        Ok(Self {
            health_api,
            autobiography_api,
            job_api,
            transcription_api,
        })
    }
}
