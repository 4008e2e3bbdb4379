use std::path::Path;

use business::domain::transcription::value_objects::AudioFormat;

/// Kind of source material supplied to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Audio(AudioFormat),
}

const TEXT_EXTENSIONS: [&str; 3] = ["txt", "md", "text"];

/// Classifies an input file as a text transcript or an audio recording.
/// Returns None for anything else.
pub fn detect_input_kind(path: &Path) -> Option<InputKind> {
    let extension = path.extension()?.to_str()?.to_lowercase();

    if TEXT_EXTENSIONS.contains(&extension.as_str()) {
        return Some(InputKind::Text);
    }

    AudioFormat::from_extension(&extension).map(InputKind::Audio)
}

/// Reads a UTF-8 transcript file.
pub async fn read_text_file(path: &Path) -> std::io::Result<String> {
    tokio::fs::read_to_string(path).await
}
