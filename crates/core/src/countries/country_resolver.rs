use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use log::{debug, info, warn};
use trialmap_vault::query::quote_literal;
use trialmap_vault::{Record, VaultApi};

use super::countries_model::CountryRef;
use super::countries_traits::CountryResolverTrait;
use crate::constants::DEFAULT_LOOKUP_CONCURRENCY;
use crate::errors::Result;
use crate::utils::record::text;

/// Distinct non-null `country__v` references across query rows.
pub fn collect_country_ids(rows: &[Record]) -> HashSet<String> {
    rows.iter()
        .filter_map(|row| text(row, "country__v"))
        .collect()
}

/// Resolves country ids with one query per id, a bounded number in flight.
pub struct CountryResolver {
    vault: Arc<dyn VaultApi>,
    concurrency: usize,
}

impl CountryResolver {
    pub fn new(vault: Arc<dyn VaultApi>) -> Self {
        CountryResolver {
            vault,
            concurrency: DEFAULT_LOOKUP_CONCURRENCY,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    async fn resolve_one(&self, country_id: &str) -> Result<Option<CountryRef>> {
        let query = format!(
            "SELECT id, name__v, code__sys FROM country__v WHERE id = {}",
            quote_literal(country_id)?
        );
        let rows = self.vault.execute_query(&query).await?;
        Ok(rows.first().map(CountryRef::from_record))
    }
}

#[async_trait]
impl CountryResolverTrait for CountryResolver {
    async fn resolve_countries(&self, ids: &HashSet<String>) -> HashMap<String, CountryRef> {
        let mut resolved = HashMap::new();
        if ids.is_empty() {
            return resolved;
        }

        let results: Vec<(String, Result<Option<CountryRef>>)> = stream::iter(ids.iter().cloned())
            .map(|id| async move {
                let result = self.resolve_one(&id).await;
                (id, result)
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        for (country_id, result) in results {
            match result {
                Ok(Some(country)) => {
                    debug!("Fetched country info for ID {}: {:?}", country_id, country);
                    resolved.insert(country_id, country);
                }
                Ok(None) => debug!("No country record for ID {}", country_id),
                Err(e) => warn!("Error fetching country {}: {}", country_id, e),
            }
        }

        info!("Fetched data for {} countries", resolved.len());
        resolved
    }
}
