//! Scraper error types.

use thiserror::Error;

pub type ScrapeResult<T> = Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Page returned status {0}")]
    BadStatus(u16),

    #[error("Invalid selector {0}")]
    Selector(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
