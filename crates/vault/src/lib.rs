//! Trialmap Vault - session and query client for the Vault clinical data platform.
//!
//! This crate owns the authenticated Vault session and executes query-language
//! requests against the platform's REST API. Every dashboard read goes through
//! the [`VaultApi`] trait so services can be exercised against a scripted vault.
//!
//! # Usage
//!
//! ```rust,ignore
//! use trialmap_vault::{VaultClient, VaultConfig};
//!
//! let client = VaultClient::new(VaultConfig::new(
//!     "https://example.veevavault.com/api/v23.1",
//!     "https://example.veevavault.com/ui",
//! ))?;
//! client.authenticate("alice@example.com", "secret").await?;
//! let rows = client.execute_query("SELECT id FROM study__v").await?;
//! ```

mod client;
mod error;
pub mod query;
mod types;

pub use client::{VaultApi, VaultClient};
pub use error::{Result, VaultError};
pub use types::*;
