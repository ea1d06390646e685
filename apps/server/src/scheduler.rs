//! Background keep-alive for the shared Vault session.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};
use trialmap_vault::VaultClient;

/// Refreshes the session every `period`. A tick without a session does nothing.
pub fn start_keep_alive_scheduler(client: Arc<VaultClient>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Vault keep-alive scheduler started ({}s interval)", period.as_secs());

        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately; nothing to refresh at startup.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            debug!("Running scheduled keep-alive");
            client.keep_alive().await;
        }
    })
}
