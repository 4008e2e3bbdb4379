use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::transcription::errors::TranscriptionError;
use crate::domain::transcription::services::TranscriberService;
use crate::domain::transcription::use_cases::transcribe::{
    MAX_AUDIO_BYTES, TranscribeAudioParams, TranscribeAudioUseCase,
};
use crate::domain::transcription::value_objects::AudioFormat;

pub struct TranscribeAudioUseCaseImpl {
    pub transcriber: Arc<dyn TranscriberService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl TranscribeAudioUseCase for TranscribeAudioUseCaseImpl {
    async fn execute(&self, params: TranscribeAudioParams) -> Result<String, TranscriptionError> {
        let format = AudioFormat::from_file_name(&params.file_name)
            .ok_or(TranscriptionError::UnsupportedFormat)?;

        if params.audio.is_empty() {
            return Err(TranscriptionError::EmptyFile);
        }

        if params.audio.len() > MAX_AUDIO_BYTES {
            return Err(TranscriptionError::FileTooLarge);
        }

        self.logger.info(&format!(
            "Transcribing {} ({} KiB, language {})",
            params.file_name,
            params.audio.len() / 1024,
            params.language
        ));

        let transcript = self
            .transcriber
            .transcribe(format, params.audio, &params.language)
            .await?;

        self.logger.info(&format!(
            "Transcription finished: {} characters",
            transcript.chars().count()
        ));

        Ok(transcript)
    }
}
