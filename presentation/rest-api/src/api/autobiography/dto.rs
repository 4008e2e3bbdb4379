use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::autobiography::errors::AutobiographyError;
use business::domain::autobiography::model::{Autobiography, Chapter, create_autobiography};
use business::domain::autobiography::services::SavedManuscript;
use business::domain::autobiography::value_objects::{LifeStage, ManuscriptFormat};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum LifeStageDto {
    #[oai(rename = "childhood")]
    Childhood,
    #[oai(rename = "youth")]
    Youth,
    #[oai(rename = "middle_age")]
    MiddleAge,
    #[oai(rename = "mature")]
    Mature,
    #[oai(rename = "elderly")]
    Elderly,
}

impl From<LifeStage> for LifeStageDto {
    fn from(stage: LifeStage) -> Self {
        match stage {
            LifeStage::Childhood => LifeStageDto::Childhood,
            LifeStage::Youth => LifeStageDto::Youth,
            LifeStage::MiddleAge => LifeStageDto::MiddleAge,
            LifeStage::Mature => LifeStageDto::Mature,
            LifeStage::Elderly => LifeStageDto::Elderly,
        }
    }
}

impl From<LifeStageDto> for LifeStage {
    fn from(dto: LifeStageDto) -> Self {
        match dto {
            LifeStageDto::Childhood => LifeStage::Childhood,
            LifeStageDto::Youth => LifeStage::Youth,
            LifeStageDto::MiddleAge => LifeStage::MiddleAge,
            LifeStageDto::Mature => LifeStage::Mature,
            LifeStageDto::Elderly => LifeStage::Elderly,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ManuscriptFormatDto {
    #[oai(rename = "markdown")]
    Markdown,
    #[oai(rename = "plain_text")]
    PlainText,
    #[oai(rename = "json")]
    Json,
}

impl From<ManuscriptFormat> for ManuscriptFormatDto {
    fn from(format: ManuscriptFormat) -> Self {
        match format {
            ManuscriptFormat::Markdown => ManuscriptFormatDto::Markdown,
            ManuscriptFormat::PlainText => ManuscriptFormatDto::PlainText,
            ManuscriptFormat::Json => ManuscriptFormatDto::Json,
        }
    }
}

impl From<ManuscriptFormatDto> for ManuscriptFormat {
    fn from(dto: ManuscriptFormatDto) -> Self {
        match dto {
            ManuscriptFormatDto::Markdown => ManuscriptFormat::Markdown,
            ManuscriptFormatDto::PlainText => ManuscriptFormat::PlainText,
            ManuscriptFormatDto::Json => ManuscriptFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct GenerateAutobiographyRequest {
    /// Life-story transcript (voice transcription result or typed text)
    #[oai(validator(min_length = 100))]
    pub transcript: String,
}

#[derive(Debug, Clone, Object)]
pub struct ChapterDto {
    /// Life stage the chapter covers
    pub stage: LifeStageDto,
    /// Age range of the stage
    pub age_range: String,
    /// Chapter title
    pub title: String,
    /// Chapter text
    pub content: String,
}

impl From<Chapter> for ChapterDto {
    fn from(chapter: Chapter) -> Self {
        Self {
            stage: chapter.stage.into(),
            age_range: chapter.stage.age_range().to_string(),
            title: chapter.title,
            content: chapter.content,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AutobiographyResponse {
    /// Book title
    pub title: String,
    /// Author (the narrator of the transcript)
    pub author_name: String,
    /// Prologue
    pub prologue: String,
    /// Chapters in chronological order
    pub chapters: Vec<ChapterDto>,
    /// Epilogue
    pub epilogue: String,
    /// Key themes of the book
    pub key_themes: Vec<String>,
    /// Life lessons drawn from the story
    pub life_lessons: Vec<String>,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
}

impl From<Autobiography> for AutobiographyResponse {
    fn from(autobiography: Autobiography) -> Self {
        Self {
            title: autobiography.title,
            author_name: autobiography.author_name,
            prologue: autobiography.prologue,
            chapters: autobiography.chapters.into_iter().map(|c| c.into()).collect(),
            epilogue: autobiography.epilogue,
            key_themes: autobiography.key_themes,
            life_lessons: autobiography.life_lessons,
            generated_at: autobiography.generated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ArchiveAutobiographyRequest {
    /// Book title
    pub title: String,
    /// Author name
    pub author_name: String,
    /// Prologue
    pub prologue: String,
    /// Chapters in chronological order
    pub chapters: Vec<ChapterDto>,
    /// Epilogue
    pub epilogue: String,
    /// Key themes of the book
    pub key_themes: Vec<String>,
    /// Life lessons drawn from the story
    pub life_lessons: Vec<String>,
    /// Formats to write; all formats when omitted
    #[oai(skip_serializing_if_is_none)]
    pub formats: Option<Vec<ManuscriptFormatDto>>,
}

impl ArchiveAutobiographyRequest {
    /// Rebuilds the domain aggregate, re-running its validation.
    pub fn into_domain(self) -> Result<(Autobiography, Vec<ManuscriptFormat>), AutobiographyError> {
        let chapters = self
            .chapters
            .into_iter()
            .map(|c| Chapter {
                stage: c.stage.into(),
                title: c.title,
                content: c.content,
            })
            .collect();

        let autobiography = create_autobiography(
            self.title,
            self.author_name,
            self.prologue,
            chapters,
            self.epilogue,
            self.key_themes,
            self.life_lessons,
        )?;

        let formats = self
            .formats
            .unwrap_or_default()
            .into_iter()
            .map(|f| f.into())
            .collect();

        Ok((autobiography, formats))
    }
}

#[derive(Debug, Clone, Object)]
pub struct SavedManuscriptResponse {
    /// Manuscript format
    pub format: ManuscriptFormatDto,
    /// Path of the written file
    pub path: String,
}

impl From<SavedManuscript> for SavedManuscriptResponse {
    fn from(saved: SavedManuscript) -> Self {
        Self {
            format: saved.format.into(),
            path: saved.path,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ArchiveAutobiographyResponse {
    /// One entry per written manuscript file
    pub saved: Vec<SavedManuscriptResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::autobiography::model::create_autobiography;

    #[test]
    fn should_derive_age_range_from_stage() {
        let autobiography = create_autobiography(
            "A Long Road Home".to_string(),
            "Kim Younghee".to_string(),
            "Prologue.".to_string(),
            vec![Chapter {
                stage: LifeStage::Mature,
                title: "The quiet years".to_string(),
                content: "...".to_string(),
            }],
            "Epilogue.".to_string(),
            vec![],
            vec![],
        )
        .unwrap();

        let response: AutobiographyResponse = autobiography.into();
        assert_eq!(response.chapters[0].age_range, "50-64");
    }

    #[test]
    fn should_reject_archive_request_without_chapters() {
        let request = ArchiveAutobiographyRequest {
            title: "Empty".to_string(),
            author_name: "A".to_string(),
            prologue: String::new(),
            chapters: vec![],
            epilogue: String::new(),
            key_themes: vec![],
            life_lessons: vec![],
            formats: None,
        };

        assert!(request.into_domain().is_err());
    }
}
