//! Product page HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use promovid_models::ProductInfo;

use crate::error::{ScrapeError, ScrapeResult};
use crate::extract;

/// Desktop browser User-Agent; storefronts serve stripped-down markup to
/// unknown agents.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for the scraper client.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Page fetch timeout
    pub timeout: Duration,
    /// Cap on candidate images per page
    pub max_images: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            max_images: 12,
        }
    }
}

impl ScraperConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            timeout: Duration::from_secs(
                std::env::var("SCRAPE_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(15),
            ),
            max_images: std::env::var("SCRAPE_MAX_IMAGES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(12),
        }
    }
}

/// Client that fetches product pages and derives [`ProductInfo`].
pub struct ScraperClient {
    http: Client,
    config: ScraperConfig,
}

impl ScraperClient {
    /// Create a new scraper client.
    pub fn new(config: ScraperConfig) -> ScrapeResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ScrapeError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ScrapeResult<Self> {
        Self::new(ScraperConfig::from_env())
    }

    /// Fetch a product page and extract title, description and images.
    pub async fn scrape(&self, url: &str) -> ScrapeResult<ProductInfo> {
        debug!("Scraping product page: {}", url);

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ScrapeError::BadStatus(response.status().as_u16()));
        }

        let html = response.text().await?;
        extract::product_info(&html, self.config.max_images)
    }

    /// Fetch a candidate image. Returns the raw bytes and the value of the
    /// Content-Type header, when the server sent one.
    pub async fn fetch_image(&self, url: &str) -> ScrapeResult<(Vec<u8>, Option<String>)> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ScrapeError::BadStatus(response.status().as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let bytes = response.bytes().await?;
        Ok((bytes.to_vec(), content_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_config_defaults() {
        let config = ScraperConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.max_images, 12);
    }

    #[tokio::test]
    async fn test_scrape_extracts_product_info() {
        let server = MockServer::start().await;

        let body = r#"<html><head><title>Store</title></head><body>
            <span id="productTitle">Test Widget</span>
            <div id="productDescription">A widget for tests</div>
            <img src="https://cdn.example.com/widget.jpg">
        </body></html>"#;

        Mock::given(method("GET"))
            .and(path("/dp/X1"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let client = ScraperClient::new(ScraperConfig::default()).unwrap();
        let info = client
            .scrape(&format!("{}/dp/X1", server.uri()))
            .await
            .unwrap();

        assert_eq!(info.title, "Test Widget");
        assert_eq!(info.description, "A widget for tests");
        assert_eq!(info.image_urls, vec!["https://cdn.example.com/widget.jpg"]);
    }

    #[tokio::test]
    async fn test_scrape_propagates_bad_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ScraperClient::new(ScraperConfig::default()).unwrap();
        let err = client
            .scrape(&format!("{}/gone", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, ScrapeError::BadStatus(404)));
    }

    #[tokio::test]
    async fn test_fetch_image_returns_bytes_and_content_type() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/img.jpg"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(vec![0xFF, 0xD8, 0xFF])
                    .insert_header("content-type", "image/jpeg"),
            )
            .mount(&server)
            .await;

        let client = ScraperClient::new(ScraperConfig::default()).unwrap();
        let (bytes, content_type) = client
            .fetch_image(&format!("{}/img.jpg", server.uri()))
            .await
            .unwrap();

        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF]);
        assert_eq!(content_type.as_deref(), Some("image/jpeg"));
    }
}
