use serde::{Deserialize, Serialize};
use trialmap_vault::Record;

use crate::utils::record::{picklist, text};
use crate::utils::vault_link::study_link;

/// A study visible to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Study {
    pub id: String,
    pub number: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub phase: Option<String>,
    #[serde(rename = "type")]
    pub study_type: Option<String>,
    pub vault_url: String,
}

impl Study {
    /// Builds a study from a `study__v` row. Rows without an id are refused.
    pub fn from_record(record: &Record, web_url: &str) -> Option<Self> {
        let id = text(record, "id")?;
        Some(Self {
            vault_url: study_link(web_url, &id),
            number: text(record, "name__v"),
            name: text(record, "study_name__v"),
            status: picklist(record, "status__v"),
            phase: picklist(record, "study_phase__v"),
            study_type: picklist(record, "study_type__v"),
            id,
        })
    }
}
