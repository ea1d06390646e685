use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use trialmap_core::{
    countries::{CountryResolver, CountryResolverTrait, CountryService, CountryServiceTrait},
    health::{SiteHealthService, SiteHealthServiceTrait},
    sites::{SiteService, SiteServiceTrait},
    status_colors::{StatusColorService, StatusColorServiceTrait},
    studies::{StudyService, StudyServiceTrait},
};
use trialmap_vault::{VaultApi, VaultClient};

use crate::config::Config;

pub struct AppState {
    /// Process-wide Vault session and query client.
    pub vault_client: Arc<VaultClient>,
    pub study_service: Arc<dyn StudyServiceTrait>,
    pub site_service: Arc<dyn SiteServiceTrait>,
    pub country_service: Arc<dyn CountryServiceTrait>,
    pub status_color_service: Arc<dyn StatusColorServiceTrait>,
    pub site_health_service: Arc<dyn SiteHealthServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TRIALMAP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    tracing::info!("Vault API base in use: {}", config.vault.api_url);

    let vault_client = Arc::new(VaultClient::new(config.vault.clone())?);
    let vault: Arc<dyn VaultApi> = vault_client.clone();

    let country_resolver: Arc<dyn CountryResolverTrait> =
        Arc::new(CountryResolver::new(vault.clone()));
    let status_color_service: Arc<dyn StatusColorServiceTrait> =
        Arc::new(StatusColorService::new(vault.clone()));
    let site_service: Arc<dyn SiteServiceTrait> = Arc::new(SiteService::new(
        vault.clone(),
        country_resolver,
        status_color_service.clone(),
    ));
    let site_health_service: Arc<dyn SiteHealthServiceTrait> =
        Arc::new(SiteHealthService::new(site_service.clone()));
    let study_service: Arc<dyn StudyServiceTrait> = Arc::new(StudyService::new(vault.clone()));
    let country_service: Arc<dyn CountryServiceTrait> = Arc::new(CountryService::new(vault));

    Ok(Arc::new(AppState {
        vault_client,
        study_service,
        site_service,
        country_service,
        status_color_service,
        site_health_service,
    }))
}
