use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::autobiography::errors::AutobiographyError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AutobiographyError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            AutobiographyError::TranscriptTooShort => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "autobiography.transcript_too_short",
            ),
            AutobiographyError::InvalidAutobiography => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "autobiography.invalid_autobiography",
            ),
            AutobiographyError::AnalysisFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "GenerationError",
                "autobiography.analysis_failed",
            ),
            AutobiographyError::GenerationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "GenerationError",
                "autobiography.generation_failed",
            ),
            AutobiographyError::ArchiveFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ArchiveError",
                "autobiography.archive_failed",
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
