use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use trialmap_core::studies::Study;

use crate::main_lib::AppState;

async fn get_studies(State(state): State<Arc<AppState>>) -> Json<Vec<Study>> {
    Json(state.study_service.get_studies().await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/studies", get(get_studies))
}
