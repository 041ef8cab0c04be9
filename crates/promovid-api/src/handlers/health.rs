//! Health check handlers.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness check endpoint.
pub async fn ready(State(state): State<AppState>) -> Json<serde_json::Value> {
    let static_root_ok = state.store.static_root().is_dir();
    Json(serde_json::json!({
        "status": if static_root_ok { "ready" } else { "degraded" },
        "static_root": static_root_ok,
    }))
}
