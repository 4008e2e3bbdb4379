#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription.unsupported_format")]
    UnsupportedFormat,
    #[error("transcription.file_too_large")]
    FileTooLarge,
    #[error("transcription.empty_file")]
    EmptyFile,
    #[error("transcription.failed")]
    Failed,
}
