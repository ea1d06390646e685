use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, error, info, warn};
use trialmap_vault::query::quote_literal;
use trialmap_vault::{QueryResult, Record, VaultApi};

use super::sites_model::{Site, SITE_FIELDS};
use super::sites_traits::SiteServiceTrait;
use crate::countries::{collect_country_ids, CountryRef, CountryResolverTrait};
use crate::errors::{Error, Result};
use crate::status_colors::{StatusColorServiceTrait, DEFAULT_STATUS_COLOR};
use crate::utils::record::{float, integer, parse_date, picklist, text};
use crate::utils::vault_link::record_link;

pub struct SiteService {
    vault: Arc<dyn VaultApi>,
    country_resolver: Arc<dyn CountryResolverTrait>,
    status_colors: Arc<dyn StatusColorServiceTrait>,
}

impl SiteService {
    pub fn new(
        vault: Arc<dyn VaultApi>,
        country_resolver: Arc<dyn CountryResolverTrait>,
        status_colors: Arc<dyn StatusColorServiceTrait>,
    ) -> Self {
        SiteService {
            vault,
            country_resolver,
            status_colors,
        }
    }

    async fn fetch_site_rows(&self, study_id: &str) -> Result<QueryResult> {
        let query = format!(
            "SELECT {} FROM site__v WHERE study__v = {}",
            SITE_FIELDS,
            quote_literal(study_id)?
        );
        Ok(self.vault.execute_query(&query).await?)
    }

    async fn fetch_sites(&self, study_id: &str) -> Result<Vec<Site>> {
        let rows = self.fetch_site_rows(study_id).await?;
        let country_ids = collect_country_ids(&rows);
        let countries = self.country_resolver.resolve_countries(&country_ids).await;
        let colors = self.status_colors.get_status_colors().await;

        Ok(self.process_site_rows(&rows, &countries, &colors))
    }

    fn process_site_rows(
        &self,
        rows: &[Record],
        countries: &HashMap<String, CountryRef>,
        colors: &HashMap<String, String>,
    ) -> Vec<Site> {
        let mut sites = Vec::with_capacity(rows.len());
        let mut without_coordinates = 0;
        let mut malformed = 0;

        for row in rows {
            match self.build_site(row, countries, colors) {
                Ok(Some(site)) => sites.push(site),
                Ok(None) => without_coordinates += 1,
                Err(e) => {
                    malformed += 1;
                    warn!("Error creating site from row: {}", e);
                }
            }
        }

        info!(
            "Processed sites - Total: {}, With coordinates: {}, Without coordinates: {}, Malformed: {}",
            rows.len(),
            sites.len(),
            without_coordinates,
            malformed
        );
        sites
    }

    /// `Ok(None)` when the row lacks a coordinate.
    fn build_site(
        &self,
        row: &Record,
        countries: &HashMap<String, CountryRef>,
        colors: &HashMap<String, String>,
    ) -> Result<Option<Site>> {
        let id = text(row, "id")
            .ok_or_else(|| Error::InvalidRecord("site row without id".to_string()))?;

        let (Some(latitude), Some(longitude)) =
            (float(row, "latitude__c"), float(row, "longitude__c"))
        else {
            debug!("Dropping site {} without coordinates", id);
            return Ok(None);
        };

        let site_status = picklist(row, "site_status__v");
        let status_color = site_status
            .as_deref()
            .and_then(|status| colors.get(status))
            .cloned()
            .unwrap_or_else(|| DEFAULT_STATUS_COLOR.to_string());

        let country_id = text(row, "country__v");
        let country = country_id
            .as_deref()
            .and_then(|country_id| countries.get(country_id));

        let number = text(row, "name__v");

        Ok(Some(Site {
            vault_url: record_link(self.vault.web_url(), &id),
            name: text(row, "site_name__v").or_else(|| number.clone()),
            number,
            status: picklist(row, "status__v"),
            site_status,
            status_color,
            country: country.and_then(|c| c.name.clone()),
            country_code: country.and_then(|c| c.code.clone()),
            country_id,
            latitude,
            longitude,
            investigator_id: text(row, "principal_investigator__v"),
            planned_greenlight_date: optional_date(row, "planned_greenlight_date__v", &id),
            actual_siv_date: optional_date(row, "actual_siv__v", &id),
            days_to_greenlight: integer(row, "days_to_greenlight__v"),
            id,
        }))
    }
}

/// Parses an optional date field; an unparseable value is logged and left unset.
fn optional_date(row: &Record, field: &str, site_id: &str) -> Option<NaiveDate> {
    let value = text(row, field)?;
    match parse_date(&value) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("Error parsing {} for site {}: {:?} ({})", field, site_id, value, e);
            None
        }
    }
}

#[async_trait]
impl SiteServiceTrait for SiteService {
    async fn get_sites(&self, study_id: &str) -> Vec<Site> {
        info!("Fetching sites for study: {}", study_id);
        match self.fetch_sites(study_id).await {
            Ok(sites) => sites,
            Err(e) => {
                error!("Error fetching sites: {}", e);
                Vec::new()
            }
        }
    }
}
