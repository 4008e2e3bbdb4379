use async_trait::async_trait;
use serde_json::json;

use business::domain::autobiography::errors::AutobiographyError;
use business::domain::autobiography::model::{Autobiography, Chapter, create_autobiography};
use business::domain::autobiography::services::{
    AutobiographyComposerService, ChapterDraft, TranscriptAnalysis,
};
use business::domain::autobiography::value_objects::LifeStage;

use crate::client::OpenAIClient;

const SYSTEM_PROMPT: &str = r#"You are the editor who turns stage drafts into one finished autobiography.

Your work:
1. Invent a compelling title for the book.
2. Write a moving prologue of at least 500 characters.
3. Connect the stage drafts into chapters that flow naturally in time order.
4. Write a meaningful epilogue of at least 500 characters.
5. Distill at least 5 key themes and at least 5 life lessons.

Style:
- literary and moving, carrying the reader along
- written to invite the reader's empathy

Hard rules:
- use ONLY the provided material; never invent new facts
- skip stages marked as lacking material; do not write chapters for them
- write in the same language as the drafts
- Return ONLY a JSON object with this EXACT structure:
{"title":"...","authorName":"...","prologue":"...","chapters":[{"stage":"childhood","title":"...","content":"..."}],"epilogue":"...","keyThemes":["..."],"lifeLessons":["..."]}
- "stage" must be one of: "childhood", "youth", "middle_age", "mature", "elderly""#;

pub struct AutobiographyComposerOpenAI {
    client: OpenAIClient,
}

impl AutobiographyComposerOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_integration_input(analysis: &TranscriptAnalysis, drafts: &[ChapterDraft]) -> String {
        let birth_year = analysis
            .birth_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let current_age = analysis
            .current_age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let mut sections = vec![format!(
            "## Author\nName: {}\nBirth year: {}\nCurrent age: {}\n\n## Story summary\n{}\n\n\
             ## Detected life stages\n{}\n\n## Main themes\n{}\n\n---",
            analysis.author_name,
            birth_year,
            current_age,
            analysis.summary,
            analysis
                .detected_stages
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            analysis.main_themes.join(", "),
        )];

        for draft in drafts {
            if draft.has_content {
                sections.push(format!(
                    "## {} ({})\nTitle: {}\nContent: {}\nKey events: {}\nEmotions: {}\nLessons: {}",
                    draft.stage,
                    draft.stage.age_range(),
                    draft.title,
                    draft.content,
                    draft.key_events.join(", "),
                    draft.emotions.join(", "),
                    draft.lessons_learned.as_deref().unwrap_or("none"),
                ));
            } else {
                sections.push(format!(
                    "## {} ({})\nNo usable material for this stage.",
                    draft.stage,
                    draft.stage.age_range(),
                ));
            }
        }

        sections.push(
            "---\nMerge the material above into one finished autobiography with a title, \
             a prologue, chapters, an epilogue, key themes and life lessons."
                .to_string(),
        );

        sections.join("\n\n")
    }

    fn parse_response(content: &str) -> Result<Autobiography, AutobiographyError> {
        let json_match = regex::Regex::new(r"\{[\s\S]*\}")
            .ok()
            .and_then(|re| re.find(content));

        let json_str = json_match
            .map(|m| m.as_str())
            .ok_or(AutobiographyError::GenerationFailed)?;

        let parsed: serde_json::Value =
            serde_json::from_str(json_str).map_err(|_| AutobiographyError::GenerationFailed)?;

        let title = parsed
            .get("title")
            .and_then(|t| t.as_str())
            .unwrap_or("")
            .to_string();

        let author_name = parsed
            .get("authorName")
            .and_then(|n| n.as_str())
            .unwrap_or("")
            .to_string();

        let prologue = parsed
            .get("prologue")
            .and_then(|p| p.as_str())
            .unwrap_or("")
            .to_string();

        let chapters: Vec<Chapter> = parsed
            .get("chapters")
            .and_then(|c| c.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|ch| {
                        let stage: LifeStage = ch.get("stage")?.as_str()?.parse().ok()?;
                        let title = ch.get("title")?.as_str()?.to_string();
                        let content = ch.get("content")?.as_str()?.to_string();
                        Some(Chapter {
                            stage,
                            title,
                            content,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let epilogue = parsed
            .get("epilogue")
            .and_then(|e| e.as_str())
            .unwrap_or("")
            .to_string();

        let key_themes: Vec<String> = parsed
            .get("keyThemes")
            .and_then(|t| t.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|t| t.as_str().map(|t| t.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        let life_lessons: Vec<String> = parsed
            .get("lifeLessons")
            .and_then(|l| l.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|l| l.as_str().map(|l| l.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        create_autobiography(
            title,
            author_name,
            prologue,
            chapters,
            epilogue,
            key_themes,
            life_lessons,
        )
        .map_err(|_| AutobiographyError::GenerationFailed)
    }
}

#[async_trait]
impl AutobiographyComposerService for AutobiographyComposerOpenAI {
    async fn compose(
        &self,
        analysis: &TranscriptAnalysis,
        drafts: &[ChapterDraft],
    ) -> Result<Autobiography, AutobiographyError> {
        let integration_input = Self::build_integration_input(analysis, drafts);

        let body = json!({
            "model": self.client.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": integration_input},
            ],
            "temperature": 0.7,
        });

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|_| AutobiographyError::GenerationFailed)?;

        if !response.status().is_success() {
            return Err(AutobiographyError::GenerationFailed);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| AutobiographyError::GenerationFailed)?;

        let content = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or(AutobiographyError::GenerationFailed)?;

        Self::parse_response(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_analysis() -> TranscriptAnalysis {
        TranscriptAnalysis {
            author_name: "Kim Younghee".to_string(),
            birth_year: Some(1952),
            current_age: None,
            summary: "A life by the river.".to_string(),
            detected_stages: vec![LifeStage::Childhood],
            main_themes: vec!["family".to_string()],
        }
    }

    #[test]
    fn should_flag_missing_stages_in_integration_input() {
        let drafts = vec![
            ChapterDraft {
                stage: LifeStage::Childhood,
                title: "The river".to_string(),
                content: "Long chapter text.".to_string(),
                key_events: vec!["learning to swim".to_string()],
                emotions: vec!["joy".to_string()],
                lessons_learned: None,
                has_content: true,
            },
            ChapterDraft::missing(LifeStage::Elderly),
        ];

        let input =
            AutobiographyComposerOpenAI::build_integration_input(&sample_analysis(), &drafts);

        assert!(input.contains("## childhood (0-12)"));
        assert!(input.contains("Key events: learning to swim"));
        assert!(input.contains("## elderly (65+)\nNo usable material for this stage."));
        assert!(input.contains("Birth year: 1952"));
        assert!(input.contains("Current age: unknown"));
    }

    #[test]
    fn should_parse_composed_autobiography() {
        let content = r#"Here is the book:
{"title":"A Long Road Home","authorName":"Kim Younghee","prologue":"It begins...","chapters":[{"stage":"childhood","title":"The river","content":"..."}],"epilogue":"It ends...","keyThemes":["family"],"lifeLessons":["patience"]}"#;

        let autobiography = AutobiographyComposerOpenAI::parse_response(content).unwrap();
        assert_eq!(autobiography.title, "A Long Road Home");
        assert_eq!(autobiography.chapters.len(), 1);
        assert_eq!(autobiography.chapters[0].stage, LifeStage::Childhood);
    }

    #[test]
    fn should_fail_when_composer_returns_no_chapters() {
        let content = r#"{"title":"Empty","authorName":"A","prologue":"","chapters":[],"epilogue":"","keyThemes":[],"lifeLessons":[]}"#;

        let result = AutobiographyComposerOpenAI::parse_response(content);
        assert!(matches!(result, Err(AutobiographyError::GenerationFailed)));
    }
}
