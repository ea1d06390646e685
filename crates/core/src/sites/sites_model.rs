use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fields selected from `site__v`.
pub const SITE_FIELDS: &str = "id, name__v, site_name__v, site_status__v, status__v, latitude__c, longitude__c, link__sys, principal_investigator__v, planned_greenlight_date__v, actual_siv__v, days_to_greenlight__v, country__v";

/// A study site with its country and display color joined in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub number: Option<String>,
    pub name: Option<String>,
    /// Lifecycle status (`status__v`), drives health scoring.
    pub status: Option<String>,
    /// Site status class (`site_status__v`), drives the display color.
    pub site_status: Option<String>,
    pub status_color: String,

    pub country_id: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,

    pub latitude: f64,
    pub longitude: f64,

    pub vault_url: String,
    pub investigator_id: Option<String>,

    pub planned_greenlight_date: Option<NaiveDate>,
    pub actual_siv_date: Option<NaiveDate>,
    pub days_to_greenlight: Option<i64>,
}
