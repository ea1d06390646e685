use async_trait::async_trait;

use super::studies_model::Study;

#[async_trait]
pub trait StudyServiceTrait: Send + Sync {
    /// All non-canceled studies. Empty on any failure.
    async fn get_studies(&self) -> Vec<Study>;
}
