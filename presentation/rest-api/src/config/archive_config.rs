use std::env;

/// Configuration for the manuscript archive.
pub struct ArchiveConfig {
    pub output_dir: String,
}

impl ArchiveConfig {
    /// Load archive configuration from environment variables
    ///
    /// Environment variables:
    /// - OUTPUT_DIR: Directory manuscript files are written to (default: "./output")
    pub fn from_env() -> Self {
        let output_dir = env::var("OUTPUT_DIR").unwrap_or_else(|_| "./output".to_string());
        Self { output_dir }
    }
}
