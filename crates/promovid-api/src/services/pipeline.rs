//! End-to-end video generation pipeline.
//!
//! Script generation, presenter selection, avatar rendering and result
//! storage, in that order. Each stage propagates its error upward; the
//! handler decides how failures reach the page.

use tracing::info;

use promovid_models::GenerationRequest;

use crate::error::ApiResult;
use crate::state::AppState;

/// Run the full pipeline and return the served URL of the finished video.
pub async fn generate_video(state: &AppState, request: &GenerationRequest) -> ApiResult<String> {
    let script = state
        .script
        .generate_script(&request.product_description)
        .await?;
    info!("Generated script ({} chars)", script.len());

    let source_url = presenter_url(state, request);
    info!("Using presenter image {}", source_url);

    let result_url = state.avatar.generate(&script, &source_url).await?;

    let (relative, mut file) = state.store.create_generated_video().await?;
    let written = state.avatar.download_result(&result_url, &mut file).await?;
    info!("Stored generated video ({} bytes) as {}", written, relative);

    Ok(state.config.static_url(&relative))
}

/// The presenter image the avatar service animates. The first selected
/// gallery image wins; an empty selection falls back to the configured
/// default avatar.
fn presenter_url(state: &AppState, request: &GenerationRequest) -> String {
    request
        .selected_images
        .first()
        .map(|relative| state.config.public_asset_url(relative))
        .unwrap_or_else(|| state.config.default_avatar_url.clone())
}
