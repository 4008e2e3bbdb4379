use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::job::use_cases::get_status::{GetJobStatusParams, GetJobStatusUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::job::dto::JobStatusResponse;
use crate::api::tags::ApiTags;

pub struct JobApi {
    get_status_use_case: Arc<dyn GetJobStatusUseCase>,
}

impl JobApi {
    pub fn new(get_status_use_case: Arc<dyn GetJobStatusUseCase>) -> Self {
        Self {
            get_status_use_case,
        }
    }
}

/// Job API
///
/// Endpoints for tracking background generation jobs.
#[OpenApi]
impl JobApi {
    /// Get the status of a generation job
    ///
    /// Returns the job's state and progress, the finished autobiography
    /// once completed, or the failure reason.
    #[oai(path = "/jobs/:job_id", method = "get", tag = "ApiTags::Jobs")]
    async fn get_job_status(&self, job_id: Path<String>) -> GetJobStatusApiResponse {
        let uuid = match Uuid::parse_str(&job_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetJobStatusApiResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "job.invalid_id".to_string(),
                }));
            }
        };

        match self
            .get_status_use_case
            .execute(GetJobStatusParams { job_id: uuid })
            .await
        {
            Ok(job) => GetJobStatusApiResponse::Ok(Json(job.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetJobStatusApiResponse::NotFound(json),
                    _ => GetJobStatusApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetJobStatusApiResponse {
    #[oai(status = 200)]
    Ok(Json<JobStatusResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
