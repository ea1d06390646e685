//! Core error types.
//!
//! Public read operations never return these; they log and degrade to an
//! empty result. The error type exists for the internal fetch steps.

use thiserror::Error;
use trialmap_vault::VaultError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Vault request failed: {0}")]
    Vault(#[from] VaultError),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}
