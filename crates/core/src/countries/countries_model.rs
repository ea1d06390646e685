use serde::{Deserialize, Serialize};
use trialmap_vault::Record;

use crate::utils::record::{text, text_or};
use crate::utils::vault_link::record_link;

pub const UNKNOWN_COUNTRY_NAME: &str = "Unknown Country";
pub const UNKNOWN_COUNTRY_CODE: &str = "??";

/// Display attributes of a country record, as joined onto sites.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRef {
    pub name: Option<String>,
    pub code: Option<String>,
}

impl CountryRef {
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: text(record, "name__v"),
            code: text(record, "code__sys"),
        }
    }
}

/// A country taking part in a study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: String,
    pub name: String,
    pub code: String,
    pub abbreviation: Option<String>,
    /// Study-country status, resolved by a second query.
    pub status: Option<String>,
    pub vault_url: String,
}

impl Country {
    /// Builds a country from a `country__v` row. `requested_id` stands in
    /// when the row carries no id of its own.
    pub fn from_record(record: &Record, requested_id: &str, web_url: &str) -> Self {
        let id = text(record, "id").unwrap_or_else(|| requested_id.to_string());
        Self {
            vault_url: record_link(web_url, &id),
            name: text_or(record, "name__v", UNKNOWN_COUNTRY_NAME),
            code: text_or(record, "code__sys", UNKNOWN_COUNTRY_CODE),
            abbreviation: text(record, "abbreviation__c"),
            status: None,
            id,
        }
    }
}
