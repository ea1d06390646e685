use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info, warn};
use trialmap_vault::VaultApi;

use super::studies_model::Study;
use super::studies_traits::StudyServiceTrait;
use crate::errors::Result;

const STUDIES_QUERY: &str = "SELECT id, name__v, study_name__v, status__v, study_phase__v, study_type__v FROM study__v WHERE status__v != 'Canceled'";

pub struct StudyService {
    vault: Arc<dyn VaultApi>,
}

impl StudyService {
    pub fn new(vault: Arc<dyn VaultApi>) -> Self {
        StudyService { vault }
    }

    async fn fetch_studies(&self) -> Result<Vec<Study>> {
        let rows = self.vault.execute_query(STUDIES_QUERY).await?;
        let web_url = self.vault.web_url();

        let studies: Vec<Study> = rows
            .iter()
            .filter_map(|row| {
                let study = Study::from_record(row, web_url);
                if study.is_none() {
                    warn!("Skipping study row without id");
                }
                study
            })
            .collect();

        Ok(studies)
    }
}

#[async_trait]
impl StudyServiceTrait for StudyService {
    async fn get_studies(&self) -> Vec<Study> {
        info!("Fetching studies");
        match self.fetch_studies().await {
            Ok(studies) => {
                info!("Found {} studies", studies.len());
                studies
            }
            Err(e) => {
                error!("Error fetching studies: {}", e);
                Vec::new()
            }
        }
    }
}
