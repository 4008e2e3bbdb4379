use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::job::errors::JobError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for JobError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            JobError::NotFound => (StatusCode::NOT_FOUND, "NotFoundError", "job.not_found"),
            JobError::TranscriptTooShort => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "job.transcript_too_short",
            ),
            JobError::InvalidTransition => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "JobError",
                "job.invalid_transition",
            ),
            JobError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "JobError",
                "job.repository",
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
