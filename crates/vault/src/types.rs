//! Types for Vault API requests and responses.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Envelope discriminator for a successful call.
pub const RESPONSE_SUCCESS: &str = "SUCCESS";

/// One row of a query result: field name to scalar, one-element picklist
/// array, or null.
pub type Record = serde_json::Map<String, Value>;

/// Ordered rows returned by a query.
pub type QueryResult = Vec<Record>;

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Connection settings for a Vault instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultConfig {
    /// API base, e.g. `https://example.veevavault.com/api/v23.1`
    pub api_url: String,
    /// Web UI base used to build deep links
    pub web_url: String,
    /// Per-request transport timeout
    pub timeout: Duration,
}

impl VaultConfig {
    pub fn new(api_url: impl Into<String>, web_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            web_url: web_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

/// An authenticated Vault session.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque session token sent as the `Authorization` header
    pub token: String,
    /// Username the session was issued for
    pub issued_for_user: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("issued_for_user", &self.issued_for_user)
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire envelope
// ─────────────────────────────────────────────────────────────────────────────

/// JSON envelope every Vault endpoint answers with.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultEnvelope {
    pub response_status: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Value>,
}

impl VaultEnvelope {
    pub fn is_success(&self) -> bool {
        self.response_status == RESPONSE_SUCCESS
    }

    /// Remote error payload as JSON text, `null` when absent.
    pub fn errors_text(&self) -> String {
        self.errors
            .as_ref()
            .map(Value::to_string)
            .unwrap_or_else(|| "null".to_string())
    }

    /// Rows of a successful query. A missing `data` field is an empty
    /// result; non-object entries are skipped.
    pub fn into_records(self) -> QueryResult {
        match self.data {
            Some(Value::Array(rows)) => rows
                .into_iter()
                .filter_map(|row| match row {
                    Value::Object(map) => Some(map),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}
