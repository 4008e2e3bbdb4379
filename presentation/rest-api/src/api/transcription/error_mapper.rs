use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::transcription::errors::TranscriptionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for TranscriptionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            TranscriptionError::UnsupportedFormat => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "transcription.unsupported_format",
            ),
            TranscriptionError::FileTooLarge => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "transcription.file_too_large",
            ),
            TranscriptionError::EmptyFile => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "transcription.empty_file",
            ),
            TranscriptionError::Failed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TranscriptionError",
                "transcription.failed",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
