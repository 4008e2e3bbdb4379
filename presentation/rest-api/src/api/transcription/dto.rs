use poem_openapi::{Multipart, Object, types::multipart::Upload};
use serde::{Deserialize, Serialize};

/// Multipart audio upload.
#[derive(Debug, Multipart)]
pub struct TranscribeAudioPayload {
    /// Audio file (mp3, mp4, mpeg, mpga, m4a, wav, webm, ogg, flac)
    pub file: Upload,
    /// Language of the recording (default: "ko")
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct TranscriptionResponse {
    /// Transcribed text
    pub transcript: String,
}
