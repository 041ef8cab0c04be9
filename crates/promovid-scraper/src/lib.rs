//! Product page scraping.
//!
//! This crate fetches a product URL and derives a title, a description and
//! a candidate image list for the confirmation page. Extraction is
//! selector-based with generic fallbacks, so storefront pages and plain
//! product pages both yield something usable.

pub mod client;
pub mod error;
pub mod extract;

pub use client::{ScraperClient, ScraperConfig};
pub use error::{ScrapeError, ScrapeResult};
