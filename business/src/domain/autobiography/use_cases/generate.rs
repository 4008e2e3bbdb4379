use async_trait::async_trait;

use crate::domain::autobiography::errors::AutobiographyError;
use crate::domain::autobiography::model::Autobiography;

/// Shorter transcripts carry too little material for even a single chapter.
pub const MIN_TRANSCRIPT_CHARS: usize = 100;

pub struct GenerateAutobiographyParams {
    pub transcript: String,
}

#[async_trait]
pub trait GenerateAutobiographyUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GenerateAutobiographyParams,
    ) -> Result<Autobiography, AutobiographyError>;
}
