use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};
use trialmap_vault::VaultApi;

use super::status_colors_constants::{ACTIVE_STATUS_COLORS_QUERY, STATUS_COLORS_QUERY};
use super::status_colors_model::{SiteStatus, StatusColor};
use super::status_colors_traits::StatusColorServiceTrait;
use crate::errors::Result;
use crate::utils::record::text;

/// The built-in status to color table.
pub fn default_status_colors() -> HashMap<String, String> {
    SiteStatus::ALL
        .iter()
        .map(|status| (status.value().to_string(), status.default_color().to_string()))
        .collect()
}

/// The built-in table as rules.
pub fn default_status_color_rules() -> Vec<StatusColor> {
    SiteStatus::ALL
        .into_iter()
        .map(StatusColor::from_default)
        .collect()
}

pub struct StatusColorService {
    vault: Arc<dyn VaultApi>,
}

impl StatusColorService {
    pub fn new(vault: Arc<dyn VaultApi>) -> Self {
        StatusColorService { vault }
    }

    async fn fetch_status_colors(&self) -> Result<HashMap<String, String>> {
        let rows = self.vault.execute_query(STATUS_COLORS_QUERY).await?;

        let mut colors = default_status_colors();
        for row in &rows {
            if let (Some(status), Some(color)) =
                (text(row, "site_status__c"), text(row, "status_color__c"))
            {
                colors.insert(status, color);
            }
        }
        debug!("Resolved {} status colors", colors.len());
        Ok(colors)
    }

    async fn fetch_active_rules(&self) -> Result<Vec<StatusColor>> {
        let rows = self.vault.execute_query(ACTIVE_STATUS_COLORS_QUERY).await?;
        Ok(rows.iter().map(StatusColor::from_record).collect())
    }
}

#[async_trait]
impl StatusColorServiceTrait for StatusColorService {
    async fn get_status_colors(&self) -> HashMap<String, String> {
        match self.fetch_status_colors().await {
            Ok(colors) => colors,
            Err(e) => {
                error!("Error fetching status colors: {}", e);
                default_status_colors()
            }
        }
    }

    async fn get_all_status_colors(&self) -> Vec<StatusColor> {
        match self.fetch_active_rules().await {
            Ok(rules) if !rules.is_empty() => rules,
            Ok(_) => default_status_color_rules(),
            Err(e) => {
                error!("Error fetching all status colors: {}", e);
                default_status_color_rules()
            }
        }
    }
}
