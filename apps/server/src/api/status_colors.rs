use std::{collections::HashMap, sync::Arc};

use axum::{extract::State, routing::get, Json, Router};
use trialmap_core::status_colors::StatusColor;

use crate::main_lib::AppState;

async fn get_status_colors(State(state): State<Arc<AppState>>) -> Json<HashMap<String, String>> {
    Json(state.status_color_service.get_status_colors().await)
}

async fn get_all_status_colors(State(state): State<Arc<AppState>>) -> Json<Vec<StatusColor>> {
    Json(state.status_color_service.get_all_status_colors().await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status-colors", get(get_status_colors))
        .route("/status-colors/all", get(get_all_status_colors))
}
