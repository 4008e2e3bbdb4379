use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::autobiography::errors::AutobiographyError;
use crate::domain::autobiography::model::Autobiography;
use crate::domain::autobiography::services::{
    AutobiographyComposerService, ChapterDraft, ChapterWriterService, TranscriptAnalyzerService,
};
use crate::domain::autobiography::use_cases::generate::{
    GenerateAutobiographyParams, GenerateAutobiographyUseCase, MIN_TRANSCRIPT_CHARS,
};
use crate::domain::autobiography::value_objects::LifeStage;
use crate::domain::logger::Logger;

pub struct GenerateAutobiographyUseCaseImpl {
    pub analyzer: Arc<dyn TranscriptAnalyzerService>,
    pub writer: Arc<dyn ChapterWriterService>,
    pub composer: Arc<dyn AutobiographyComposerService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateAutobiographyUseCase for GenerateAutobiographyUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateAutobiographyParams,
    ) -> Result<Autobiography, AutobiographyError> {
        let transcript = params.transcript.trim();

        if transcript.chars().count() < MIN_TRANSCRIPT_CHARS {
            return Err(AutobiographyError::TranscriptTooShort);
        }

        self.logger.info(&format!(
            "Generating autobiography from a {}-character transcript",
            transcript.chars().count()
        ));

        let analysis = self.analyzer.analyze(transcript).await?;
        self.logger.info(&format!(
            "Transcript analyzed: author {}, {} stage(s) detected",
            analysis.author_name,
            analysis.detected_stages.len()
        ));

        // All five stage writers run against the same transcript at once.
        let (childhood, youth, middle_age, mature, elderly) = tokio::join!(
            self.writer.write_chapter(LifeStage::Childhood, transcript),
            self.writer.write_chapter(LifeStage::Youth, transcript),
            self.writer.write_chapter(LifeStage::MiddleAge, transcript),
            self.writer.write_chapter(LifeStage::Mature, transcript),
            self.writer.write_chapter(LifeStage::Elderly, transcript),
        );

        let mut drafts = Vec::with_capacity(LifeStage::ALL.len());
        for (stage, result) in
            LifeStage::ALL
                .into_iter()
                .zip([childhood, youth, middle_age, mature, elderly])
        {
            match result {
                Ok(draft) => drafts.push(draft),
                // A single failed writer must not sink the whole manuscript:
                // the stage is handed to the composer as missing material.
                Err(err) => {
                    self.logger
                        .warn(&format!("Chapter writer failed for {}: {}", stage, err));
                    drafts.push(ChapterDraft::missing(stage));
                }
            }
        }

        let autobiography = self.composer.compose(&analysis, &drafts).await?;

        self.logger.info(&format!(
            "Autobiography composed: \"{}\" with {} chapter(s)",
            autobiography.title,
            autobiography.chapters.len()
        ));

        Ok(autobiography)
    }
}
