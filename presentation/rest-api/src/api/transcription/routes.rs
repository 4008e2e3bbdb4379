use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::transcription::use_cases::transcribe::{
    TranscribeAudioParams, TranscribeAudioUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::transcription::dto::{TranscribeAudioPayload, TranscriptionResponse};

pub struct TranscriptionApi {
    transcribe_use_case: Arc<dyn TranscribeAudioUseCase>,
}

impl TranscriptionApi {
    pub fn new(transcribe_use_case: Arc<dyn TranscribeAudioUseCase>) -> Self {
        Self {
            transcribe_use_case,
        }
    }
}

/// Transcription API
///
/// Endpoints for turning voice recordings into life-story transcripts.
#[OpenApi]
impl TranscriptionApi {
    /// Transcribe an audio file
    ///
    /// Accepts a multipart upload of up to 25 MB and returns the
    /// transcribed text.
    #[oai(
        path = "/transcriptions",
        method = "post",
        tag = "ApiTags::Transcriptions"
    )]
    async fn transcribe(&self, payload: TranscribeAudioPayload) -> TranscribeAudioApiResponse {
        let file_name = payload
            .file
            .file_name()
            .map(|name| name.to_string())
            .unwrap_or_default();

        let audio = match payload.file.into_vec().await {
            Ok(bytes) => bytes,
            Err(_) => {
                return TranscribeAudioApiResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "transcription.unreadable_upload".to_string(),
                }));
            }
        };

        let language = payload.language.unwrap_or_else(|| "ko".to_string());

        match self
            .transcribe_use_case
            .execute(TranscribeAudioParams {
                file_name,
                audio,
                language,
            })
            .await
        {
            Ok(transcript) => {
                TranscribeAudioApiResponse::Ok(Json(TranscriptionResponse { transcript }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => TranscribeAudioApiResponse::BadRequest(json),
                    _ => TranscribeAudioApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum TranscribeAudioApiResponse {
    #[oai(status = 200)]
    Ok(Json<TranscriptionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
