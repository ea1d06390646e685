//! Trialmap Core - study, site and country reporting over Vault data.
//!
//! The Vault query language has no joins, so every view here is assembled
//! in-process: raw site rows are joined against country lookups and the
//! status color table, and site health is derived from the finished sites.
//! Nothing is persisted; every read re-fetches from the platform.

pub mod constants;
pub mod countries;
pub mod errors;
pub mod health;
pub mod sites;
pub mod status_colors;
pub mod studies;
pub mod utils;

#[cfg(test)]
mod testing;

pub use errors::Error;
pub use errors::Result;
