//! Page handlers: intake and confirmation.

use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};
use validator::Validate;

use promovid_models::{ConfirmationContext, FlashMessage, VideoType};
use promovid_storage::StorageError;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::templates::{ConfirmTemplate, IndexTemplate};

/// Render the intake page.
pub async fn index() -> IndexTemplate {
    IndexTemplate::new()
}

#[derive(Debug, Validate)]
struct IntakeForm {
    #[validate(url)]
    product_url: String,
}

/// Raw fields of the intake form.
#[derive(Debug, Default)]
struct IntakeFields {
    product_url: String,
    video_type: String,
    avatar: Option<(String, Vec<u8>)>,
}

async fn read_intake_fields(multipart: &mut Multipart) -> ApiResult<IntakeFields> {
    let mut fields = IntakeFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed form data: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "product_url" => {
                fields.product_url = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Malformed form data: {e}")))?
                    .trim()
                    .to_string();
            }
            "video_type" => {
                fields.video_type = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Malformed form data: {e}")))?;
            }
            "avatar_file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Malformed form data: {e}")))?;
                // Browsers submit an empty file part when nothing was picked
                if !filename.is_empty() && !bytes.is_empty() {
                    fields.avatar = Some((filename, bytes.to_vec()));
                }
            }
            _ => {}
        }
    }

    Ok(fields)
}

fn intake_with_error(message: impl Into<String>) -> Response {
    IndexTemplate::with_flashes(vec![FlashMessage::error(message)]).into_response()
}

/// Handle intake submission: scrape the product page, mirror its images
/// into the static root, and render the confirmation page.
///
/// Failures re-render the intake page with an error banner.
pub async fn generate_confirmation(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Response> {
    let fields = read_intake_fields(&mut multipart).await?;

    if fields.product_url.is_empty() {
        return Ok(intake_with_error("Product URL is required."));
    }
    let form = IntakeForm {
        product_url: fields.product_url.clone(),
    };
    if form.validate().is_err() {
        return Ok(intake_with_error("Please enter a valid product URL."));
    }

    let video_type: VideoType = match fields.video_type.parse() {
        Ok(vt) => vt,
        Err(_) => return Ok(intake_with_error("Please choose a valid video type.")),
    };

    info!("Scraping product data from {}", fields.product_url);
    let product = match state.scraper.scrape(&fields.product_url).await {
        Ok(product) => product,
        Err(e) => {
            warn!("Scrape of {} failed: {}", fields.product_url, e);
            return Ok(intake_with_error(
                "Failed to scrape product data from the URL. Please check the link or try another.",
            ));
        }
    };
    info!(
        "Scraped '{}': {} chars of description, {} candidate images",
        product.title,
        product.description.len(),
        product.image_urls.len()
    );

    // Mirror candidate images into the static root, keeping document
    // order. Images that cannot be fetched are skipped.
    let mut confirm_images = Vec::with_capacity(product.image_urls.len());
    for url in &product.image_urls {
        match state.scraper.fetch_image(url).await {
            Ok((bytes, content_type)) => {
                match state
                    .store
                    .save_scraped(url, content_type.as_deref(), &bytes)
                    .await
                {
                    Ok(relative) => confirm_images.push(relative),
                    Err(e) => warn!("Could not store image {}: {}", url, e),
                }
            }
            Err(e) => warn!("Skipping image {}: {}", url, e),
        }
    }

    // An uploaded avatar joins the gallery at the front; the generation
    // request carries no separate avatar field.
    if let Some((filename, bytes)) = fields.avatar {
        match state.store.save_upload(&filename, &bytes).await {
            Ok(relative) => confirm_images.insert(0, relative),
            Err(StorageError::InvalidExtension(_)) => {
                return Ok(intake_with_error(
                    "Invalid image file type. Please use PNG, JPG, JPEG, or WEBP.",
                ));
            }
            Err(e) => return Err(e.into()),
        }
    }

    let context = ConfirmationContext {
        product_title: product.title,
        product_description: product.description,
        confirm_images,
        video_type,
    };

    Ok(ConfirmTemplate::new(context).into_response())
}
