//! Scraped product data and the confirmation-page context.

use serde::{Deserialize, Serialize};

use crate::gallery::Gallery;
use crate::video::VideoType;

/// Product data derived from scraping the submitted URL.
///
/// `image_urls` are absolute source URLs on the product page; they are
/// mirrored into the static root before the confirmation page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub title: String,
    pub description: String,
    pub image_urls: Vec<String>,
}

impl ProductInfo {
    /// Fallback title when nothing usable was found on the page.
    pub const FALLBACK_TITLE: &'static str = "Product";
    /// Fallback description when nothing usable was found on the page.
    pub const FALLBACK_DESCRIPTION: &'static str = "No description found.";
}

/// Server-rendered data bundle handed to the confirmation page.
///
/// Immutable once rendered except for client-local edits to the
/// description and the tile selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationContext {
    pub product_title: String,
    pub product_description: String,
    /// Ordered image paths, resolvable under the static file root
    pub confirm_images: Vec<String>,
    pub video_type: VideoType,
}

impl ConfirmationContext {
    /// Initial gallery state for this context: first 8 tiles selected.
    pub fn initial_gallery(&self) -> Gallery {
        Gallery::from_paths(self.confirm_images.iter().cloned())
    }
}
