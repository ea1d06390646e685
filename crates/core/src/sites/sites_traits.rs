use async_trait::async_trait;

use super::sites_model::Site;

#[async_trait]
pub trait SiteServiceTrait: Send + Sync {
    /// Geolocated sites of a study. Empty on any aggregate failure.
    async fn get_sites(&self, study_id: &str) -> Vec<Site>;
}
