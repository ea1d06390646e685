use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::health_model::SiteHealth;
use super::health_scorer::score_site;
use super::health_traits::SiteHealthServiceTrait;
use crate::sites::SiteServiceTrait;

/// Scores the geolocated sites of a study.
pub struct SiteHealthService {
    site_service: Arc<dyn SiteServiceTrait>,
}

impl SiteHealthService {
    pub fn new(site_service: Arc<dyn SiteServiceTrait>) -> Self {
        Self { site_service }
    }
}

#[async_trait]
impl SiteHealthServiceTrait for SiteHealthService {
    async fn get_site_health_data(&self, study_id: &str) -> Vec<SiteHealth> {
        info!("Fetching site health data for study ID: {}", study_id);

        let sites = self.site_service.get_sites(study_id).await;
        if sites.is_empty() {
            debug!("No sites for study {}, nothing to score", study_id);
            return Vec::new();
        }

        let health: Vec<SiteHealth> = sites.iter().map(score_site).collect();
        debug!("Scored {} sites for study {}", health.len(), study_id);
        health
    }
}
