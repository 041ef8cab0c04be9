//! Video generation handler.

use axum::extract::State;
use axum::Json;
use tracing::{info, warn};

use promovid_models::{GenerationRequest, GenerationResponse};

use crate::services::pipeline;
use crate::state::AppState;

/// Handle `POST /create_video_route`.
///
/// The page state machine is driven by the body, so every pipeline
/// failure maps to `{success: false, error}` rather than an error status.
pub async fn create_video(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Json<GenerationResponse> {
    info!(
        video_type = %request.video_type,
        selected_images = request.selected_images.len(),
        "Video generation requested"
    );

    match pipeline::generate_video(&state, &request).await {
        Ok(video_url) => {
            info!("Video ready at {}", video_url);
            Json(GenerationResponse::ok(video_url))
        }
        Err(e) => {
            warn!("Video generation failed: {}", e);
            Json(GenerationResponse::err(e.to_string()))
        }
    }
}
