use async_trait::async_trait;
use serde_json::json;

use business::domain::autobiography::errors::AutobiographyError;
use business::domain::autobiography::services::{TranscriptAnalysis, TranscriptAnalyzerService};
use business::domain::autobiography::value_objects::LifeStage;

use crate::client::OpenAIClient;

const SYSTEM_PROMPT: &str = r#"You are an expert analyst of life-story transcripts.

Your task:
- identify the narrator's name
- determine the birth year, when the text supports it
- determine the current age, when the text supports it
- summarize the whole story
- detect which life stages the transcript actually covers:
  "childhood" (0-12), "youth" (13-29), "middle_age" (30-49), "mature" (50-64), "elderly" (65+)
- identify the main recurring themes

Rules:
- Only report facts clearly supported by the transcript; use null for anything uncertain.
- Write free-text fields in the same language as the transcript.
- Return ONLY a JSON object with this EXACT structure:
{"authorName":"...","birthYear":1952,"currentAge":71,"summary":"...","detectedStages":["childhood","youth"],"mainThemes":["...","..."]}"#;

pub struct TranscriptAnalyzerOpenAI {
    client: OpenAIClient,
}

impl TranscriptAnalyzerOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn parse_response(content: &str) -> Result<TranscriptAnalysis, AutobiographyError> {
        let json_match = regex::Regex::new(r"\{[\s\S]*\}")
            .ok()
            .and_then(|re| re.find(content));

        let json_str = json_match
            .map(|m| m.as_str())
            .ok_or(AutobiographyError::AnalysisFailed)?;

        let parsed: serde_json::Value =
            serde_json::from_str(json_str).map_err(|_| AutobiographyError::AnalysisFailed)?;

        let author_name = parsed
            .get("authorName")
            .and_then(|n| n.as_str())
            .unwrap_or("")
            .to_string();

        let birth_year = parsed
            .get("birthYear")
            .and_then(|y| y.as_i64())
            .map(|y| y as i32);

        let current_age = parsed
            .get("currentAge")
            .and_then(|a| a.as_u64())
            .map(|a| a.min(u8::MAX as u64) as u8);

        let summary = parsed
            .get("summary")
            .and_then(|s| s.as_str())
            .unwrap_or("")
            .to_string();

        let detected_stages: Vec<LifeStage> = parsed
            .get("detectedStages")
            .and_then(|s| s.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|s| s.as_str())
                    .filter_map(|s| s.parse().ok())
                    .collect()
            })
            .unwrap_or_default();

        let main_themes: Vec<String> = parsed
            .get("mainThemes")
            .and_then(|t| t.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|t| t.as_str().map(|t| t.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        Ok(TranscriptAnalysis {
            author_name,
            birth_year,
            current_age,
            summary,
            detected_stages,
            main_themes,
        })
    }
}

#[async_trait]
impl TranscriptAnalyzerService for TranscriptAnalyzerOpenAI {
    async fn analyze(&self, transcript: &str) -> Result<TranscriptAnalysis, AutobiographyError> {
        let body = json!({
            "model": self.client.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": format!(
                    "Analyze the following life-story transcript:\n\n{}",
                    transcript
                )},
            ],
            "temperature": 0.3,
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
            .map_err(|_| AutobiographyError::AnalysisFailed)?;

        if !response.status().is_success() {
            return Err(AutobiographyError::AnalysisFailed);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| AutobiographyError::AnalysisFailed)?;

        let content = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or(AutobiographyError::AnalysisFailed)?;

        Self::parse_response(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_analysis_wrapped_in_markdown_fences() {
        let content = r#"```json
{"authorName":"Kim Younghee","birthYear":1952,"currentAge":71,"summary":"A long life.","detectedStages":["childhood","elderly"],"mainThemes":["family"]}
```"#;

        let analysis = TranscriptAnalyzerOpenAI::parse_response(content).unwrap();
        assert_eq!(analysis.author_name, "Kim Younghee");
        assert_eq!(analysis.birth_year, Some(1952));
        assert_eq!(
            analysis.detected_stages,
            vec![LifeStage::Childhood, LifeStage::Elderly]
        );
    }

    #[test]
    fn should_tolerate_missing_optional_fields() {
        let content = r#"{"authorName":"","summary":"Sparse story.","detectedStages":[],"mainThemes":[]}"#;

        let analysis = TranscriptAnalyzerOpenAI::parse_response(content).unwrap();
        assert_eq!(analysis.birth_year, None);
        assert_eq!(analysis.current_age, None);
        assert!(analysis.detected_stages.is_empty());
    }

    #[test]
    fn should_skip_unknown_stage_names() {
        let content = r#"{"authorName":"A","summary":"S","detectedStages":["childhood","retirement"],"mainThemes":[]}"#;

        let analysis = TranscriptAnalyzerOpenAI::parse_response(content).unwrap();
        assert_eq!(analysis.detected_stages, vec![LifeStage::Childhood]);
    }

    #[test]
    fn should_fail_when_no_json_object_present() {
        let result = TranscriptAnalyzerOpenAI::parse_response("Sorry, I cannot help with that.");
        assert!(matches!(result, Err(AutobiographyError::AnalysisFailed)));
    }
}
