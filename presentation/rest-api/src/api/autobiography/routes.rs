use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::autobiography::use_cases::archive::{
    ArchiveAutobiographyParams, ArchiveAutobiographyUseCase,
};
use business::domain::autobiography::use_cases::generate::{
    GenerateAutobiographyParams, GenerateAutobiographyUseCase,
};
use business::domain::job::use_cases::submit::{
    SubmitGenerationJobParams, SubmitGenerationJobUseCase,
};

use crate::api::autobiography::dto::{
    ArchiveAutobiographyRequest, ArchiveAutobiographyResponse, AutobiographyResponse,
    GenerateAutobiographyRequest, SavedManuscriptResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::job::dto::JobAcceptedResponse;
use crate::api::tags::ApiTags;

pub struct AutobiographyApi {
    generate_use_case: Arc<dyn GenerateAutobiographyUseCase>,
    submit_use_case: Arc<dyn SubmitGenerationJobUseCase>,
    archive_use_case: Arc<dyn ArchiveAutobiographyUseCase>,
}

impl AutobiographyApi {
    pub fn new(
        generate_use_case: Arc<dyn GenerateAutobiographyUseCase>,
        submit_use_case: Arc<dyn SubmitGenerationJobUseCase>,
        archive_use_case: Arc<dyn ArchiveAutobiographyUseCase>,
    ) -> Self {
        Self {
            generate_use_case,
            submit_use_case,
            archive_use_case,
        }
    }
}

/// Autobiography API
///
/// Endpoints for generating autobiographies from life-story transcripts
/// and archiving the finished manuscripts.
#[OpenApi]
impl AutobiographyApi {
    /// Generate an autobiography
    ///
    /// Runs the full pipeline synchronously: transcript analysis, one
    /// specialist writer per life stage, final composition. Expect a
    /// response time of several minutes.
    #[oai(
        path = "/autobiographies",
        method = "post",
        tag = "ApiTags::Autobiographies"
    )]
    async fn generate(
        &self,
        body: Json<GenerateAutobiographyRequest>,
    ) -> GenerateAutobiographyApiResponse {
        match self
            .generate_use_case
            .execute(GenerateAutobiographyParams {
                transcript: body.0.transcript,
            })
            .await
        {
            Ok(autobiography) => GenerateAutobiographyApiResponse::Ok(Json(autobiography.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GenerateAutobiographyApiResponse::BadRequest(json),
                    _ => GenerateAutobiographyApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Submit a background generation job
    ///
    /// Returns immediately with a job id; poll `/jobs/{job_id}` for
    /// progress and the finished autobiography.
    #[oai(
        path = "/autobiographies/jobs",
        method = "post",
        tag = "ApiTags::Autobiographies"
    )]
    async fn submit_job(&self, body: Json<GenerateAutobiographyRequest>) -> SubmitJobApiResponse {
        match self
            .submit_use_case
            .execute(SubmitGenerationJobParams {
                transcript: body.0.transcript,
            })
            .await
        {
            Ok(job) => SubmitJobApiResponse::Accepted(Json(JobAcceptedResponse {
                job_id: job.id.to_string(),
                state: job.state.into(),
                message: "Generation started. Poll /jobs/{job_id} for progress.".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitJobApiResponse::BadRequest(json),
                    _ => SubmitJobApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Archive an autobiography
    ///
    /// Writes a previously generated autobiography into the output
    /// directory as manuscript files.
    #[oai(
        path = "/autobiographies/archive",
        method = "post",
        tag = "ApiTags::Autobiographies"
    )]
    async fn archive(&self, body: Json<ArchiveAutobiographyRequest>) -> ArchiveApiResponse {
        let (autobiography, formats) = match body.0.into_domain() {
            Ok(domain) => domain,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return ArchiveApiResponse::BadRequest(json);
            }
        };

        match self
            .archive_use_case
            .execute(ArchiveAutobiographyParams {
                autobiography,
                formats,
            })
            .await
        {
            Ok(saved) => ArchiveApiResponse::Ok(Json(ArchiveAutobiographyResponse {
                saved: saved
                    .into_iter()
                    .map(SavedManuscriptResponse::from)
                    .collect(),
            })),
            Err(err) => {
                let (_, json) = err.into_error_response();
                ArchiveApiResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GenerateAutobiographyApiResponse {
    #[oai(status = 200)]
    Ok(Json<AutobiographyResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitJobApiResponse {
    #[oai(status = 202)]
    Accepted(Json<JobAcceptedResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ArchiveApiResponse {
    #[oai(status = 200)]
    Ok(Json<ArchiveAutobiographyResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
