use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use business::domain::transcription::errors::TranscriptionError;
use business::domain::transcription::services::TranscriberService;
use business::domain::transcription::value_objects::AudioFormat;

use crate::client::OpenAIClient;

/// Speech-to-text adapter over the OpenAI audio transcription endpoint.
pub struct WhisperTranscriberOpenAI {
    client: OpenAIClient,
}

impl WhisperTranscriberOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TranscriberService for WhisperTranscriberOpenAI {
    async fn transcribe(
        &self,
        format: AudioFormat,
        audio: Vec<u8>,
        language: &str,
    ) -> Result<String, TranscriptionError> {
        // The endpoint infers the container from the uploaded file name.
        let part = Part::bytes(audio).file_name(format!("audio.{}", format.extension()));

        let form = Form::new()
            .part("file", part)
            .text("model", "whisper-1")
            .text("language", language.to_string())
            .text("response_format", "text");

        let response = self
            .client
            .client
            .post(self.client.transcriptions_url())
            .header("Authorization", self.client.auth_header())
            .multipart(form)
            .send()
            .await
            .map_err(|_| TranscriptionError::Failed)?;

        if !response.status().is_success() {
            return Err(TranscriptionError::Failed);
        }

        let transcript = response
            .text()
            .await
            .map_err(|_| TranscriptionError::Failed)?;

        Ok(transcript.trim().to_string())
    }
}
