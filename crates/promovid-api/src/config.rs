//! API configuration.

/// Default presenter image when no gallery image is selected. The avatar
/// service needs a publicly reachable URL.
const DEFAULT_AVATAR_URL: &str =
    "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Base URL under which this server is reachable from outside.
    /// The avatar service fetches presenter images through it.
    pub public_base_url: String,
    /// Static file root on disk
    pub static_dir: String,
    /// Fallback presenter image URL
    pub default_avatar_url: String,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size (uploads included)
    pub max_body_size: usize,
    /// Environment (development/production)
    pub environment: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            public_base_url: "http://127.0.0.1:8000".to_string(),
            static_dir: "static".to_string(),
            default_avatar_url: DEFAULT_AVATAR_URL.to_string(),
            cors_origins: vec!["*".to_string()],
            max_body_size: 16 * 1024 * 1024, // 16MB upload cap
            environment: "development".to_string(),
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            public_base_url: std::env::var("PUBLIC_BASE_URL").unwrap_or(defaults.public_base_url),
            static_dir: std::env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
            default_avatar_url: std::env::var("DEFAULT_AVATAR_URL")
                .unwrap_or(defaults.default_avatar_url),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_size),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }

    /// Path under which a static-relative asset is served.
    pub fn static_url(&self, relative: &str) -> String {
        format!("/static/{relative}")
    }

    /// Absolute, externally reachable URL of a static-relative asset.
    pub fn public_asset_url(&self, relative: &str) -> String {
        format!(
            "{}/static/{relative}",
            self.public_base_url.trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_urls() {
        let config = ApiConfig {
            public_base_url: "https://promo.example.com/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(config.static_url("generated/a.mp4"), "/static/generated/a.mp4");
        assert_eq!(
            config.public_asset_url("uploads/b.png"),
            "https://promo.example.com/static/uploads/b.png"
        );
    }

    #[test]
    fn test_default_body_cap() {
        assert_eq!(ApiConfig::default().max_body_size, 16 * 1024 * 1024);
    }
}
