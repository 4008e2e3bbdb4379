use chrono::{DateTime, Utc};
use serde::Serialize;

use super::errors::AutobiographyError;
use super::value_objects::LifeStage;

/// A single chapter of the finished manuscript.
#[derive(Debug, Clone, Serialize)]
pub struct Chapter {
    pub stage: LifeStage,
    pub title: String,
    pub content: String,
}

/// A completed autobiography produced by the generation pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct Autobiography {
    pub title: String,
    pub author_name: String,
    pub prologue: String,
    pub chapters: Vec<Chapter>,
    pub epilogue: String,
    pub key_themes: Vec<String>,
    pub life_lessons: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Creates a new Autobiography with validation.
///
/// A blank author name is replaced with a placeholder rather than rejected:
/// transcripts narrated in the first person often never state a name.
pub fn create_autobiography(
    title: String,
    author_name: String,
    prologue: String,
    chapters: Vec<Chapter>,
    epilogue: String,
    key_themes: Vec<String>,
    life_lessons: Vec<String>,
) -> Result<Autobiography, AutobiographyError> {
    if title.trim().is_empty() {
        return Err(AutobiographyError::InvalidAutobiography);
    }

    if chapters.is_empty() {
        return Err(AutobiographyError::InvalidAutobiography);
    }

    let author_name = match author_name.trim() {
        "" => "Unknown author".to_string(),
        name => name.to_string(),
    };

    Ok(Autobiography {
        title: title.trim().to_string(),
        author_name,
        prologue,
        chapters,
        epilogue,
        key_themes,
        life_lessons,
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chapter() -> Chapter {
        Chapter {
            stage: LifeStage::Childhood,
            title: "The house by the river".to_string(),
            content: "I was born in a small village...".to_string(),
        }
    }

    #[test]
    fn should_create_autobiography_when_title_and_chapters_present() {
        let result = create_autobiography(
            "  A Long Road Home ".to_string(),
            "Kim Younghee".to_string(),
            "This is where it begins.".to_string(),
            vec![sample_chapter()],
            "And so it ends.".to_string(),
            vec!["family".to_string()],
            vec!["patience".to_string()],
        );

        assert!(result.is_ok());
        let autobiography = result.unwrap();
        assert_eq!(autobiography.title, "A Long Road Home");
        assert_eq!(autobiography.author_name, "Kim Younghee");
        assert_eq!(autobiography.chapters.len(), 1);
    }

    #[test]
    fn should_reject_autobiography_with_empty_title() {
        let result = create_autobiography(
            "   ".to_string(),
            "Kim Younghee".to_string(),
            String::new(),
            vec![sample_chapter()],
            String::new(),
            vec![],
            vec![],
        );

        assert!(matches!(
            result,
            Err(AutobiographyError::InvalidAutobiography)
        ));
    }

    #[test]
    fn should_reject_autobiography_without_chapters() {
        let result = create_autobiography(
            "A Long Road Home".to_string(),
            "Kim Younghee".to_string(),
            String::new(),
            vec![],
            String::new(),
            vec![],
            vec![],
        );

        assert!(matches!(
            result,
            Err(AutobiographyError::InvalidAutobiography)
        ));
    }

    #[test]
    fn should_fall_back_to_placeholder_when_author_unknown() {
        let result = create_autobiography(
            "A Long Road Home".to_string(),
            "  ".to_string(),
            String::new(),
            vec![sample_chapter()],
            String::new(),
            vec![],
            vec![],
        );

        assert_eq!(result.unwrap().author_name, "Unknown author");
    }
}
