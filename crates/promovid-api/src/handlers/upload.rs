//! Gallery image upload handler.

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::{debug, warn};

use promovid_models::UploadResponse;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Handle `POST /upload_image`.
///
/// Business failures (missing file, bad extension, write error) come back
/// as `{success: false, error}` with status 200; the page surfaces them
/// as an alert and leaves the gallery unchanged.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed form data: {e}")))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Malformed form data: {e}")))?;

        let response = match state.store.save_upload(&filename, &bytes).await {
            Ok(relative) => {
                debug!("Stored upload {} as {}", filename, relative);
                UploadResponse::ok(relative)
            }
            Err(e) => {
                warn!("Upload of {} rejected: {}", filename, e);
                UploadResponse::err(e.to_string())
            }
        };
        return Ok(Json(response));
    }

    Ok(Json(UploadResponse::err("No image file provided")))
}
