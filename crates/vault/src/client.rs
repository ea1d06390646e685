//! Vault API client.
//!
//! Owns the process-wide Vault session. Session mutations (`authenticate`,
//! `logout`) hold the session lock for the whole round trip; queries and
//! keep-alives copy the token out and release the lock before sending.

use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use tokio::sync::Mutex;

use crate::error::{Result, VaultError};
use crate::types::*;

/// Query access to a Vault instance.
///
/// Aggregation services depend on this trait rather than on [`VaultClient`].
#[async_trait]
pub trait VaultApi: Send + Sync {
    /// Runs one query-language statement and returns its rows.
    async fn execute_query(&self, query: &str) -> Result<QueryResult>;

    /// Web UI base used to build deep links.
    fn web_url(&self) -> &str;
}

/// Client for the Vault REST API.
#[derive(Debug)]
pub struct VaultClient {
    client: reqwest::Client,
    api_url: String,
    web_url: String,
    session: Mutex<Option<Session>>,
}

impl VaultClient {
    /// Create a new client. No network call is made until `authenticate`.
    pub fn new(config: VaultConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| VaultError::Config(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            web_url: config.web_url.trim_end_matches('/').to_string(),
            session: Mutex::new(None),
        })
    }

    /// Headers for calls made on behalf of a session.
    fn headers(token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(token)
            .map_err(|_| VaultError::authentication("Invalid session token format"))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    /// Read the JSON envelope out of a response.
    ///
    /// Non-2xx answers are accepted only when they carry a failure envelope,
    /// so the remote error payload survives.
    async fn read_envelope(response: reqwest::Response) -> Result<VaultEnvelope> {
        let status = response.status();
        let body = response.text().await?;
        debug!("Vault response ({}): {} bytes", status, body.len());

        match serde_json::from_str::<VaultEnvelope>(&body) {
            Ok(envelope) if status.is_success() || !envelope.is_success() => Ok(envelope),
            Ok(_) => Err(VaultError::invalid_response(format!(
                "HTTP {} with a SUCCESS envelope",
                status.as_u16()
            ))),
            Err(e) if status.is_success() => Err(e.into()),
            Err(_) => Err(VaultError::invalid_response(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            ))),
        }
    }

    /// Copy of the current session token, if any.
    async fn token(&self) -> Option<String> {
        self.session.lock().await.as_ref().map(|s| s.token.clone())
    }

    /// The current session, if any.
    pub async fn session(&self) -> Option<Session> {
        self.session.lock().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.lock().await.is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Session lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Authenticate and replace the current session.
    ///
    /// Every failure collapses into [`VaultError::Authentication`]; the
    /// previous session, if any, is kept when authentication fails.
    ///
    /// POST {api}/auth
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Session> {
        info!("Authenticating user: {}", username);

        let mut current = self.session.lock().await;
        match self.request_session(username, password).await {
            Ok(session) => {
                *current = Some(session.clone());
                info!("Authentication successful");
                Ok(session)
            }
            Err(e) => {
                warn!("Authentication failed for {}: {}", username, e);
                Err(e)
            }
        }
    }

    async fn request_session(&self, username: &str, password: &str) -> Result<Session> {
        let url = format!("{}/auth", self.api_url);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|e| VaultError::authentication(e.to_string()))?;

        let envelope = Self::read_envelope(response)
            .await
            .map_err(|e| VaultError::authentication(e.to_string()))?;

        if !envelope.is_success() {
            return Err(VaultError::authentication(envelope.errors_text()));
        }

        let token = envelope
            .session_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| VaultError::authentication("Response carried no sessionId"))?;

        Ok(Session {
            token,
            issued_for_user: username.to_string(),
        })
    }

    /// Best-effort session refresh. Does nothing without a session and never
    /// reports failure to the caller.
    ///
    /// POST {api}/keep-alive
    pub async fn keep_alive(&self) {
        let Some(token) = self.token().await else {
            debug!("Keep-alive skipped: no active session");
            return;
        };

        match self.send_keep_alive(&token).await {
            Ok(()) => debug!("Session kept alive"),
            Err(e) => error!("Error keeping session alive: {}", e),
        }
    }

    async fn send_keep_alive(&self, token: &str) -> Result<()> {
        let url = format!("{}/keep-alive", self.api_url);

        let response = self
            .client
            .post(&url)
            .headers(Self::headers(token)?)
            .send()
            .await?;

        let envelope = Self::read_envelope(response).await?;
        if envelope.is_success() {
            Ok(())
        } else {
            Err(VaultError::Rejected(envelope.errors_text()))
        }
    }

    /// End the remote session.
    ///
    /// The local session is cleared only when the platform confirms the
    /// logout; any failure returns `false` and leaves the session in place.
    ///
    /// DELETE {api}/session
    pub async fn logout(&self) -> bool {
        let mut current = self.session.lock().await;
        let Some(token) = current.as_ref().map(|s| s.token.clone()) else {
            warn!("Logout requested without an active session");
            return false;
        };

        let outcome = self.end_session(&token).await;
        match outcome {
            Ok(()) => {
                *current = None;
                info!("Logged out of Vault");
                true
            }
            Err(e) => {
                warn!("Vault logout failed: {}", e);
                false
            }
        }
    }

    async fn end_session(&self, token: &str) -> Result<()> {
        let url = format!("{}/session", self.api_url);

        let response = self
            .client
            .delete(&url)
            .headers(Self::headers(token)?)
            .send()
            .await?;

        let envelope = Self::read_envelope(response).await?;
        if envelope.is_success() {
            Ok(())
        } else {
            Err(VaultError::Rejected(envelope.errors_text()))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Execute a query with the current session.
    ///
    /// Fails with [`VaultError::NoActiveSession`] before any network call when
    /// no session exists.
    ///
    /// POST {api}/query
    pub async fn execute_query(&self, query: &str) -> Result<QueryResult> {
        let Some(token) = self.token().await else {
            error!("No active session");
            return Err(VaultError::NoActiveSession);
        };

        debug!("Executing query: {}", query);
        let result = self.run_query(&token, query).await;
        if let Err(e) = &result {
            error!("Error executing query: {}", e);
        }
        result
    }

    async fn run_query(&self, token: &str, query: &str) -> Result<QueryResult> {
        let url = format!("{}/query", self.api_url);

        let response = self
            .client
            .post(&url)
            .headers(Self::headers(token)?)
            .form(&[("q", query)])
            .send()
            .await?;

        let envelope = Self::read_envelope(response).await?;
        if envelope.is_success() {
            Ok(envelope.into_records())
        } else {
            Err(VaultError::Rejected(envelope.errors_text()))
        }
    }

    /// Web UI base used to build deep links.
    pub fn web_url(&self) -> &str {
        &self.web_url
    }
}

#[async_trait]
impl VaultApi for VaultClient {
    async fn execute_query(&self, query: &str) -> Result<QueryResult> {
        VaultClient::execute_query(self, query).await
    }

    fn web_url(&self) -> &str {
        &self.web_url
    }
}
