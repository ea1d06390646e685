use async_trait::async_trait;

use super::health_model::SiteHealth;

#[async_trait]
pub trait SiteHealthServiceTrait: Send + Sync {
    /// Health reports for the study's sites. Empty on any failure.
    async fn get_site_health_data(&self, study_id: &str) -> Vec<SiteHealth>;
}
