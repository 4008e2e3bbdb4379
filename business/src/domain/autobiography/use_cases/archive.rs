use async_trait::async_trait;

use crate::domain::autobiography::errors::AutobiographyError;
use crate::domain::autobiography::model::Autobiography;
use crate::domain::autobiography::services::SavedManuscript;
use crate::domain::autobiography::value_objects::ManuscriptFormat;

pub struct ArchiveAutobiographyParams {
    pub autobiography: Autobiography,
    pub formats: Vec<ManuscriptFormat>,
}

#[async_trait]
pub trait ArchiveAutobiographyUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ArchiveAutobiographyParams,
    ) -> Result<Vec<SavedManuscript>, AutobiographyError>;
}
