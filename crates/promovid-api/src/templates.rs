//! Page templates.
//!
//! Rendering is a pure projection of server-side state: the confirmation
//! gallery markup is derived from a fresh [`Gallery`], so the selected
//! markers in the HTML always match the model defaults.

use askama::Template;

use promovid_models::{ConfirmationContext, FlashMessage, Gallery, Tile, VideoType};

/// Intake page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub flashes: Vec<FlashMessage>,
}

impl IndexTemplate {
    pub fn new() -> Self {
        Self { flashes: Vec::new() }
    }

    pub fn with_flashes(flashes: Vec<FlashMessage>) -> Self {
        Self { flashes }
    }
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Confirmation page.
#[derive(Template)]
#[template(path = "confirm.html")]
pub struct ConfirmTemplate {
    pub product_title: String,
    pub product_description: String,
    pub video_type: VideoType,
    pub tiles: Vec<Tile>,
    pub flashes: Vec<FlashMessage>,
}

impl ConfirmTemplate {
    /// Build the page from a confirmation context; tile selection comes
    /// from the initial gallery state (first 8 selected).
    pub fn new(context: ConfirmationContext) -> Self {
        let gallery: Gallery = context.initial_gallery();
        Self {
            product_title: context.product_title,
            product_description: context.product_description,
            video_type: context.video_type,
            tiles: gallery.tiles().to_vec(),
            flashes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(image_count: usize) -> ConfirmationContext {
        ConfirmationContext {
            product_title: "Deluxe Widget".to_string(),
            product_description: "A fine widget.".to_string(),
            confirm_images: (0..image_count)
                .map(|i| format!("scraped/{i}.jpg"))
                .collect(),
            video_type: VideoType::Product,
        }
    }

    #[test]
    fn test_confirm_template_renders() {
        let html = ConfirmTemplate::new(context(10)).render().unwrap();
        assert!(html.contains("Deluxe Widget"));
        assert!(html.contains("/static/scraped/0.jpg"));
    }

    #[test]
    fn test_index_template_renders_flashes() {
        let template = IndexTemplate::with_flashes(vec![FlashMessage::error(
            "Failed to scrape product data",
        )]);
        let html = template.render().unwrap();
        assert!(html.contains("Failed to scrape product data"));
        assert!(html.contains("flash-error"));
    }
}
