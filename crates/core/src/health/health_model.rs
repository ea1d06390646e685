//! Site health models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Issue messages
// =============================================================================

pub const ISSUE_LOW_HEALTH_INDEX: &str = "low health index";
pub const ISSUE_SITE_ON_HOLD: &str = "site on hold";
pub const ISSUE_SITE_SUSPENDED: &str = "site suspended";
pub const ISSUE_SITE_TERMINATED: &str = "site terminated";
pub const ISSUE_SLOW_STARTUP: &str = "startup taking too long";
pub const ISSUE_NONE: &str = "site operating normally";

// =============================================================================
// Health Status
// =============================================================================

/// Score bucket. Lower bounds are inclusive: 80 is good, 60 is fair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "fair")]
    Fair,
    #[serde(rename = "needs attention")]
    NeedsAttention,
}

impl HealthStatus {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            HealthStatus::Good
        } else if score >= 60 {
            HealthStatus::Fair
        } else {
            HealthStatus::NeedsAttention
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Good => "good",
            HealthStatus::Fair => "fair",
            HealthStatus::NeedsAttention => "needs attention",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Trend
// =============================================================================

/// Placeholder trend label, chosen at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub const ALL: [Trend; 3] = [Trend::Up, Trend::Down, Trend::Stable];
}

// =============================================================================
// Site Health
// =============================================================================

/// Health report for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteHealth {
    pub id: String,
    pub name: Option<String>,
    pub number: Option<String>,
    pub status: Option<String>,
    pub country_id: Option<String>,
    pub country: Option<String>,
    /// Score in [0, 100].
    pub health_score: u8,
    pub health_status: HealthStatus,
    pub trend: Trend,
    /// Never empty.
    pub issues: Vec<String>,
    pub last_updated: DateTime<Utc>,
    pub vault_url: String,
}
