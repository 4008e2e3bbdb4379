use async_trait::async_trait;
use serde_json::json;

use business::domain::autobiography::errors::AutobiographyError;
use business::domain::autobiography::services::{ChapterDraft, ChapterWriterService};
use business::domain::autobiography::value_objects::LifeStage;

use crate::client::OpenAIClient;

const CHILDHOOD_FOCUS: &str = r#"You are a biographer specialized in childhood (ages 0-12).

Material to look for:
- birth story and family background
- the childhood home and neighbourhood
- parents, grandparents and siblings
- kindergarten and primary school days
- childhood friends and games
- first memories and the happiest moments
- family trips or special occasions

Writing style:
- warm and lyrical, written like a novel
- reflect a child's innocent gaze and curiosity"#;

const YOUTH_FOCUS: &str = r#"You are a biographer specialized in youth (ages 13-29).

Material to look for:
- secondary school days: studies, friendships, teachers
- adolescence and the shaping of identity
- first love and early relationships
- university or vocational training
- the search for a calling, dreams, the first job
- independence and self-discovery
- setbacks and how they were overcome

Writing style:
- dynamic and vivid, written like a novel
- render growing pains and realizations as concrete scenes"#;

const MIDDLE_AGE_FOCUS: &str = r#"You are a biographer specialized in middle age (ages 30-49).

Material to look for:
- marriage and building a family
- the birth and raising of children
- professional growth and challenges
- building financial stability
- the changing relationship with parents
- successes and failures
- decisive choices and their consequences

Writing style:
- mature and considered, written like a novel
- render responsibility and devotion as concrete scenes"#;

const MATURE_FOCUS: &str = r#"You are a biographer specialized in the mature years (ages 50-64).

Material to look for:
- the peak of a career and its achievements
- children growing up and leaving home
- caring for and losing parents
- health problems and how they were met
- plans for a second act, preparing for retirement
- grandchildren
- new hobbies and interests

Writing style:
- seasoned and contemplative, written like a novel
- unfold wisdom and insight through lived experience, with gratitude"#;

const ELDERLY_FOCUS: &str = r#"You are a biographer specialized in the elderly years (ages 65 and up).

Material to look for:
- life after retirement
- health and adapting to age
- grandchildren
- the twilight years with a spouse
- old friendships
- feelings when looking back on a whole life
- the message to pass on to the next generation

Writing style:
- warm and retrospective, written like a novel
- carry wisdom in natural dialogue; end with resonance"#;

const COMMON_RULES: &str = r#"
Length and texture:
- make the "content" field at least 1500 characters of detailed narration
- describe scenes and episodes in novelistic detail
- use dialogue to bring moments to life
- engage the five senses and the narrator's inner life

Hard rules:
- extract ONLY what the transcript supports for your life stage; never invent facts
- if the transcript holds nothing for your stage, set "hasContent" to false and leave the other fields empty
- write in the same language as the transcript
- Return ONLY a JSON object with this EXACT structure:
{"title":"...","content":"...","keyEvents":["...","..."],"emotions":["...","..."],"lessonsLearned":"...","hasContent":true}"#;

pub struct ChapterWriterOpenAI {
    client: OpenAIClient,
}

impl ChapterWriterOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn system_prompt(stage: LifeStage) -> String {
        let focus = match stage {
            LifeStage::Childhood => CHILDHOOD_FOCUS,
            LifeStage::Youth => YOUTH_FOCUS,
            LifeStage::MiddleAge => MIDDLE_AGE_FOCUS,
            LifeStage::Mature => MATURE_FOCUS,
            LifeStage::Elderly => ELDERLY_FOCUS,
        };
        format!("{}\n{}", focus, COMMON_RULES)
    }

    fn parse_response(stage: LifeStage, content: &str) -> Result<ChapterDraft, AutobiographyError> {
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

        let chapter_content = parsed
            .get("content")
            .and_then(|c| c.as_str())
            .unwrap_or("")
            .to_string();

        let key_events: Vec<String> = parsed
            .get("keyEvents")
            .and_then(|e| e.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|e| e.as_str().map(|e| e.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        let emotions: Vec<String> = parsed
            .get("emotions")
            .and_then(|e| e.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|e| e.as_str().map(|e| e.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        let lessons_learned = parsed
            .get("lessonsLearned")
            .and_then(|l| l.as_str())
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.to_string());

        // A draft claiming content but carrying none is treated as missing.
        let has_content = parsed
            .get("hasContent")
            .and_then(|h| h.as_bool())
            .unwrap_or(false)
            && !chapter_content.trim().is_empty();

        if !has_content {
            return Ok(ChapterDraft::missing(stage));
        }

        Ok(ChapterDraft {
            stage,
            title,
            content: chapter_content,
            key_events,
            emotions,
            lessons_learned,
            has_content,
        })
    }
}

#[async_trait]
impl ChapterWriterService for ChapterWriterOpenAI {
    async fn write_chapter(
        &self,
        stage: LifeStage,
        transcript: &str,
    ) -> Result<ChapterDraft, AutobiographyError> {
        let body = json!({
            "model": self.client.model,
            "messages": [
                {"role": "system", "content": Self::system_prompt(stage)},
                {"role": "user", "content": format!(
                    "Extract the material for your life stage ({}, ages {}) from the transcript \
                     below and write it as an autobiography chapter.\n\n\
                     Make the content field at least 1500 characters, with scene descriptions \
                     and dialogue, like a novel.\n\n\
                     Transcript:\n{}",
                    stage,
                    stage.age_range(),
                    transcript
                )},
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

        Self::parse_response(stage, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_a_full_draft() {
        let content = r#"{"title":"The river years","content":"I still remember the smell of the river...","keyEvents":["learning to swim"],"emotions":["joy"],"lessonsLearned":"rivers keep moving","hasContent":true}"#;

        let draft =
            ChapterWriterOpenAI::parse_response(LifeStage::Childhood, content).unwrap();
        assert!(draft.has_content);
        assert_eq!(draft.stage, LifeStage::Childhood);
        assert_eq!(draft.title, "The river years");
        assert_eq!(draft.key_events, vec!["learning to swim"]);
    }

    #[test]
    fn should_return_missing_draft_when_stage_not_covered() {
        let content = r#"{"title":"","content":"","keyEvents":[],"emotions":[],"lessonsLearned":null,"hasContent":false}"#;

        let draft = ChapterWriterOpenAI::parse_response(LifeStage::Elderly, content).unwrap();
        assert!(!draft.has_content);
        assert_eq!(draft.stage, LifeStage::Elderly);
    }

    #[test]
    fn should_treat_blank_content_as_missing_even_if_flagged() {
        let content = r#"{"title":"Ghost chapter","content":"   ","keyEvents":[],"emotions":[],"hasContent":true}"#;

        let draft = ChapterWriterOpenAI::parse_response(LifeStage::Youth, content).unwrap();
        assert!(!draft.has_content);
    }
}
