#[derive(Debug, thiserror::Error)]
pub enum AutobiographyError {
    #[error("autobiography.transcript_too_short")]
    TranscriptTooShort,
    #[error("autobiography.analysis_failed")]
    AnalysisFailed,
    #[error("autobiography.generation_failed")]
    GenerationFailed,
    #[error("autobiography.invalid_autobiography")]
    InvalidAutobiography,
    #[error("autobiography.archive_failed")]
    ArchiveFailed,
}
