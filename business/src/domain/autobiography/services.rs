use async_trait::async_trait;

use super::errors::AutobiographyError;
use super::model::Autobiography;
use super::value_objects::{LifeStage, ManuscriptFormat};

/// Facts extracted from a transcript before any chapter is written.
#[derive(Debug, Clone)]
pub struct TranscriptAnalysis {
    pub author_name: String,
    pub birth_year: Option<i32>,
    pub current_age: Option<u8>,
    pub summary: String,
    pub detected_stages: Vec<LifeStage>,
    pub main_themes: Vec<String>,
}

/// Chapter material produced by a single life-stage writer.
#[derive(Debug, Clone)]
pub struct ChapterDraft {
    pub stage: LifeStage,
    pub title: String,
    pub content: String,
    pub key_events: Vec<String>,
    pub emotions: Vec<String>,
    pub lessons_learned: Option<String>,
    pub has_content: bool,
}

impl ChapterDraft {
    /// Placeholder draft for a stage the transcript does not cover
    /// (or whose writer failed).
    pub fn missing(stage: LifeStage) -> Self {
        Self {
            stage,
            title: String::new(),
            content: String::new(),
            key_events: vec![],
            emotions: vec![],
            lessons_learned: None,
            has_content: false,
        }
    }
}

/// Service port for extracting author facts from a life-story transcript.
#[async_trait]
pub trait TranscriptAnalyzerService: Send + Sync {
    async fn analyze(&self, transcript: &str) -> Result<TranscriptAnalysis, AutobiographyError>;
}

/// Service port for drafting the chapter of a single life stage.
#[async_trait]
pub trait ChapterWriterService: Send + Sync {
    async fn write_chapter(
        &self,
        stage: LifeStage,
        transcript: &str,
    ) -> Result<ChapterDraft, AutobiographyError>;
}

/// Service port for merging the analysis and the stage drafts into
/// the final manuscript.
#[async_trait]
pub trait AutobiographyComposerService: Send + Sync {
    async fn compose(
        &self,
        analysis: &TranscriptAnalysis,
        drafts: &[ChapterDraft],
    ) -> Result<Autobiography, AutobiographyError>;
}

/// A manuscript file written to the archive.
#[derive(Debug, Clone)]
pub struct SavedManuscript {
    pub format: ManuscriptFormat,
    pub path: String,
}

/// Service port for persisting a finished autobiography as manuscript files.
#[async_trait]
pub trait ManuscriptArchiveService: Send + Sync {
    async fn save(
        &self,
        autobiography: &Autobiography,
        formats: &[ManuscriptFormat],
    ) -> Result<Vec<SavedManuscript>, AutobiographyError>;
}
