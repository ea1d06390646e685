use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use log::{debug, error, info, warn};
use trialmap_vault::query::quote_literal;
use trialmap_vault::VaultApi;

use super::countries_model::Country;
use super::countries_traits::CountryServiceTrait;
use super::country_resolver::collect_country_ids;
use crate::constants::DEFAULT_LOOKUP_CONCURRENCY;
use crate::errors::Result;
use crate::utils::record::picklist;

pub struct CountryService {
    vault: Arc<dyn VaultApi>,
    concurrency: usize,
}

impl CountryService {
    pub fn new(vault: Arc<dyn VaultApi>) -> Self {
        CountryService {
            vault,
            concurrency: DEFAULT_LOOKUP_CONCURRENCY,
        }
    }

    async fn fetch_study_country_ids(&self, study_id: &str) -> Result<HashSet<String>> {
        let query = format!(
            "SELECT country__v FROM site__v WHERE study__v = {}",
            quote_literal(study_id)?
        );
        let rows = self.vault.execute_query(&query).await?;
        Ok(collect_country_ids(&rows))
    }

    async fn fetch_country_detail(&self, country_id: &str) -> Result<Option<Country>> {
        let query = format!(
            "SELECT id, name__v, code__sys, abbreviation__c, link__sys FROM country__v WHERE id = {}",
            quote_literal(country_id)?
        );
        let rows = self.vault.execute_query(&query).await?;
        Ok(rows
            .first()
            .map(|row| Country::from_record(row, country_id, self.vault.web_url())))
    }

    /// Country details keyed by record id. Ids that fail are skipped.
    async fn fetch_country_details(
        &self,
        country_ids: &HashSet<String>,
    ) -> HashMap<String, Country> {
        let results: Vec<(String, Result<Option<Country>>)> =
            stream::iter(country_ids.iter().cloned())
                .map(|id| async move {
                    let result = self.fetch_country_detail(&id).await;
                    (id, result)
                })
                .buffer_unordered(self.concurrency)
                .collect()
                .await;

        let mut countries = HashMap::new();
        for (country_id, result) in results {
            match result {
                Ok(Some(country)) => {
                    countries.insert(country.id.clone(), country);
                }
                Ok(None) => debug!("No country record for ID {}", country_id),
                Err(e) => warn!("Error fetching country details for ID {}: {}", country_id, e),
            }
        }
        countries
    }

    async fn fetch_country_status(
        &self,
        study_id: &str,
        country_id: &str,
    ) -> Result<Option<String>> {
        let query = format!(
            "SELECT status__v FROM study_country__v WHERE study__v = {} AND country__v = {}",
            quote_literal(study_id)?,
            quote_literal(country_id)?
        );
        let rows = self.vault.execute_query(&query).await?;
        Ok(rows.first().and_then(|row| picklist(row, "status__v")))
    }

    async fn update_country_statuses(
        &self,
        countries: &mut HashMap<String, Country>,
        study_id: &str,
    ) {
        for (country_id, country) in countries.iter_mut() {
            match self.fetch_country_status(study_id, country_id).await {
                Ok(status) => country.status = status,
                Err(e) => warn!("Error fetching status for country {}: {}", country_id, e),
            }
        }
    }

    async fn fetch_countries(&self, study_id: &str) -> Result<Vec<Country>> {
        let country_ids = self.fetch_study_country_ids(study_id).await?;
        if country_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut countries = self.fetch_country_details(&country_ids).await;
        self.update_country_statuses(&mut countries, study_id).await;

        let mut countries: Vec<Country> = countries.into_values().collect();
        countries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(countries)
    }
}

#[async_trait]
impl CountryServiceTrait for CountryService {
    async fn get_countries(&self, study_id: &str) -> Vec<Country> {
        info!("Fetching countries for study: {}", study_id);
        match self.fetch_countries(study_id).await {
            Ok(countries) => countries,
            Err(e) => {
                error!("Error fetching countries: {}", e);
                Vec::new()
            }
        }
    }
}
