use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{AuthRequest, AuthResponse},
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Decodes credentials from a form-encoded or JSON body.
fn parse_auth_request(headers: &HeaderMap, body: &[u8]) -> ApiResult<AuthRequest> {
    let mime = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_default();

    match mime.as_str() {
        FORM_CONTENT_TYPE => Ok(serde_urlencoded::from_bytes(body)?),
        JSON_CONTENT_TYPE => Ok(serde_json::from_slice(body)?),
        _ => Err(ApiError::UnsupportedMediaType(mime)),
    }
}

async fn login(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let request = parse_auth_request(&headers, &body)?;
    info!("Processing login request for user: {}", request.username);

    match state
        .vault_client
        .authenticate(&request.username, &request.password)
        .await
    {
        Ok(session) => Ok((
            StatusCode::OK,
            Json(AuthResponse::success().with_session_id(session.token)),
        )),
        Err(e) => {
            warn!("Login failed for {}: {}", request.username, e);
            Ok((
                StatusCode::BAD_REQUEST,
                Json(AuthResponse::error("Authentication failed")),
            ))
        }
    }
}

async fn keep_alive(State(state): State<Arc<AppState>>) -> Json<AuthResponse> {
    state.vault_client.keep_alive().await;
    Json(AuthResponse::success())
}

async fn logout(State(state): State<Arc<AppState>>) -> (StatusCode, Json<AuthResponse>) {
    info!("Processing logout request");
    if state.vault_client.logout().await {
        (
            StatusCode::OK,
            Json(AuthResponse::success().with_message("Logged out")),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::error("Logout failed")),
        )
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/keep-alive", post(keep_alive))
        .route("/auth/logout", post(logout))
}
