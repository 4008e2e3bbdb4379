use async_trait::async_trait;

use crate::domain::transcription::errors::TranscriptionError;

/// Upload cap of the speech-to-text API.
pub const MAX_AUDIO_BYTES: usize = 25 * 1024 * 1024;

pub struct TranscribeAudioParams {
    pub file_name: String,
    pub audio: Vec<u8>,
    pub language: String,
}

#[async_trait]
pub trait TranscribeAudioUseCase: Send + Sync {
    async fn execute(&self, params: TranscribeAudioParams) -> Result<String, TranscriptionError>;
}
