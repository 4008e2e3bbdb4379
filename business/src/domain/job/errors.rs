use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("job.not_found")]
    NotFound,
    #[error("job.transcript_too_short")]
    TranscriptTooShort,
    #[error("job.invalid_transition")]
    InvalidTransition,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
