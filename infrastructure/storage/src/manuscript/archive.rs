use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;

use business::domain::autobiography::errors::AutobiographyError;
use business::domain::autobiography::model::Autobiography;
use business::domain::autobiography::services::{ManuscriptArchiveService, SavedManuscript};
use business::domain::autobiography::value_objects::ManuscriptFormat;

use super::render;

/// Writes finished autobiographies into the output directory, one file
/// per requested format.
pub struct ManuscriptArchiveFs {
    output_dir: PathBuf,
}

impl ManuscriptArchiveFs {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Strips characters that are hostile in file names.
    fn sanitize_file_name(name: &str) -> String {
        const INVALID: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

        let sanitized: String = name
            .chars()
            .map(|c| if INVALID.contains(&c) { '_' } else { c })
            .collect();

        let sanitized = sanitized.trim().to_string();
        if sanitized.is_empty() {
            "unknown".to_string()
        } else {
            sanitized
        }
    }

    fn base_name(author_name: &str) -> String {
        format!(
            "{}_autobiography_{}",
            Self::sanitize_file_name(author_name),
            Utc::now().format("%Y%m%d_%H%M%S")
        )
    }
}

#[async_trait]
impl ManuscriptArchiveService for ManuscriptArchiveFs {
    async fn save(
        &self,
        autobiography: &Autobiography,
        formats: &[ManuscriptFormat],
    ) -> Result<Vec<SavedManuscript>, AutobiographyError> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|_| AutobiographyError::ArchiveFailed)?;

        let base_name = Self::base_name(&autobiography.author_name);
        let mut saved = Vec::with_capacity(formats.len());

        for format in formats {
            let path = self
                .output_dir
                .join(format!("{}.{}", base_name, format.extension()));

            let contents = match format {
                ManuscriptFormat::Markdown => render::to_markdown(autobiography),
                ManuscriptFormat::PlainText => render::to_plain_text(autobiography),
                ManuscriptFormat::Json => serde_json::to_string_pretty(autobiography)
                    .map_err(|_| AutobiographyError::ArchiveFailed)?,
            };

            fs::write(&path, contents)
                .await
                .map_err(|_| AutobiographyError::ArchiveFailed)?;

            tracing::debug!("manuscript written to {}", path.display());

            saved.push(SavedManuscript {
                format: *format,
                path: path.display().to_string(),
            });
        }

        Ok(saved)
    }
}
