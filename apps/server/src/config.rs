use std::{net::SocketAddr, time::Duration};

use anyhow::{anyhow, Context};
use trialmap_vault::{VaultConfig, DEFAULT_TIMEOUT_SECS};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_KEEP_ALIVE_SECS: u64 = 900;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub vault: VaultConfig,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Background keep-alive period; `None` disables the task.
    pub keep_alive_interval: Option<Duration>,
}

impl Config {
    /// Defaults for everything but the two Vault base URLs.
    pub fn new(vault_api_url: impl Into<String>, vault_web_url: impl Into<String>) -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            vault: VaultConfig::new(vault_api_url, vault_web_url),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            keep_alive_interval: Some(Duration::from_secs(DEFAULT_KEEP_ALIVE_SECS)),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_url = required("VAULT_API_URL")?;
        let web_url = required("VAULT_WEB_URL")?;
        let vault_timeout: u64 = std::env::var("VAULT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let listen_addr: SocketAddr = std::env::var("TRIALMAP_LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid TRIALMAP_LISTEN_ADDR")?;
        let cors_allow = std::env::var("TRIALMAP_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("TRIALMAP_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_MS.to_string())
            .parse()
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        let keep_alive_secs: u64 = std::env::var("TRIALMAP_KEEP_ALIVE_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_KEEP_ALIVE_SECS);

        Ok(Self {
            listen_addr,
            vault: VaultConfig::new(api_url, web_url)
                .with_timeout(Duration::from_secs(vault_timeout)),
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            keep_alive_interval: (keep_alive_secs > 0)
                .then(|| Duration::from_secs(keep_alive_secs)),
        })
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| anyhow!("{} must be set", key))
}
