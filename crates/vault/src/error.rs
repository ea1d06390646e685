//! Error types for the vault client.

use thiserror::Error;

/// Result type alias for vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;

/// Errors that can occur while talking to the Vault API.
#[derive(Debug, Error)]
pub enum VaultError {
    /// A query or keep-alive was attempted before a successful authenticate.
    #[error("No active session")]
    NoActiveSession,

    /// Authentication failed for any reason (credentials, transport, body).
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The platform answered with a non-SUCCESS envelope. Carries the
    /// remote `errors` payload verbatim.
    #[error("Vault rejected the request: {0}")]
    Rejected(String),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body parsed but did not have the envelope shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A value refused by query literal quoting.
    #[error("Invalid query literal: {0:?}")]
    InvalidLiteral(String),

    /// The client could not be constructed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl VaultError {
    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// True for every failure of a query round trip, whether the platform
    /// rejected the query or the transport broke. Callers that do not need
    /// to tell the two apart match on this instead of the variants.
    pub fn is_query_failure(&self) -> bool {
        matches!(
            self,
            Self::Rejected(_) | Self::Http(_) | Self::Json(_) | Self::InvalidResponse(_)
        )
    }
}
