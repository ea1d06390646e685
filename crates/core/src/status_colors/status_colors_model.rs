use serde::{Deserialize, Serialize};
use trialmap_vault::Record;

use crate::utils::record::text;

/// Built-in site statuses and their default colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SiteStatus {
    Active,
    Suspended,
    Completed,
    Inactive,
    OnHold,
    Terminated,
}

impl SiteStatus {
    pub const ALL: [SiteStatus; 6] = [
        SiteStatus::Active,
        SiteStatus::Suspended,
        SiteStatus::Completed,
        SiteStatus::Inactive,
        SiteStatus::OnHold,
        SiteStatus::Terminated,
    ];

    /// Vault picklist value of this status.
    pub fn value(&self) -> &'static str {
        match self {
            SiteStatus::Active => "active_site__v",
            SiteStatus::Suspended => "suspended_site__v",
            SiteStatus::Completed => "completed_site__v",
            SiteStatus::Inactive => "inactive_site__v",
            SiteStatus::OnHold => "on_hold__v",
            SiteStatus::Terminated => "terminated_site__v",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SiteStatus::Active => "ACTIVE",
            SiteStatus::Suspended => "SUSPENDED",
            SiteStatus::Completed => "COMPLETED",
            SiteStatus::Inactive => "INACTIVE",
            SiteStatus::OnHold => "ON_HOLD",
            SiteStatus::Terminated => "TERMINATED",
        }
    }

    pub fn default_color(&self) -> &'static str {
        match self {
            SiteStatus::Active => "#4CAF50",
            SiteStatus::Inactive => "#F44336",
            SiteStatus::OnHold => "#FF9800",
            SiteStatus::Completed => "#2196F3",
            SiteStatus::Suspended => "#FFC107",
            SiteStatus::Terminated => "#9C27B0",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.value() == value)
    }
}

impl std::fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A configured status color rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusColor {
    pub name: Option<String>,
    pub site_status: Option<String>,
    pub status_color: Option<String>,
}

impl StatusColor {
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: text(record, "name__v"),
            site_status: text(record, "site_status__c"),
            status_color: text(record, "status_color__c"),
        }
    }

    pub fn from_default(status: SiteStatus) -> Self {
        Self {
            name: Some(status.as_str().to_string()),
            site_status: Some(status.value().to_string()),
            status_color: Some(status.default_color().to_string()),
        }
    }
}
