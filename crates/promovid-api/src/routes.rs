//! API route definitions.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

use crate::handlers::{health, pages, upload, video};
use crate::middleware::{cors_layer, request_logging, security_headers};
use crate::state::AppState;

/// Create the API router with all routes.
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let max_body_size = state.config.max_body_size;
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/", get(pages::index))
        .route(
            "/generate_confirmation_route",
            post(pages::generate_confirmation),
        )
        .route("/upload_image", post(upload::upload_image))
        .route("/create_video_route", post(video::create_video))
        .route("/health", get(health::health))
        .route("/healthz", get(health::health))
        .route("/ready", get(health::ready))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(axum::middleware::from_fn(security_headers))
        .layer(axum::middleware::from_fn(request_logging))
        .layer(cors)
        .with_state(state)
}
