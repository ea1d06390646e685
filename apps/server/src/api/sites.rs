use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use trialmap_core::{countries::Country, health::SiteHealth, sites::Site};

use crate::main_lib::AppState;

async fn get_sites(
    Path(study_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<Site>> {
    Json(state.site_service.get_sites(&study_id).await)
}

async fn get_countries(
    Path(study_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<Country>> {
    Json(state.country_service.get_countries(&study_id).await)
}

async fn get_site_health(
    Path(study_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<SiteHealth>> {
    Json(state.site_health_service.get_site_health_data(&study_id).await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/{study_id}/sites", get(get_sites))
        .route("/{study_id}/countries", get(get_countries))
        .route("/{study_id}/site-health", get(get_site_health))
}
