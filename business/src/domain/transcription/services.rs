use async_trait::async_trait;

use super::errors::TranscriptionError;
use super::value_objects::AudioFormat;

/// Service port for turning a voice recording into text.
#[async_trait]
pub trait TranscriberService: Send + Sync {
    async fn transcribe(
        &self,
        format: AudioFormat,
        audio: Vec<u8>,
        language: &str,
    ) -> Result<String, TranscriptionError>;
}
