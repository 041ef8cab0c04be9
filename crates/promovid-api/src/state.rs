//! Application state.

use std::sync::Arc;

use promovid_avatar::AvatarClient;
use promovid_scraper::ScraperClient;
use promovid_storage::AssetStore;

use crate::config::ApiConfig;
use crate::services::script::ScriptClient;

/// Shared application state.
///
/// All outbound service clients are built once at startup and shared;
/// per-request construction would re-read the environment on every call.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: Arc<AssetStore>,
    pub scraper: Arc<ScraperClient>,
    pub script: Arc<ScriptClient>,
    pub avatar: Arc<AvatarClient>,
}

impl AppState {
    /// Create new application state.
    pub async fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let store = AssetStore::new(&config.static_dir).await?;
        let scraper = ScraperClient::from_env()?;
        let script = ScriptClient::from_env();
        let avatar = AvatarClient::from_env()?;

        Ok(Self {
            config,
            store: Arc::new(store),
            scraper: Arc::new(scraper),
            script: Arc::new(script),
            avatar: Arc::new(avatar),
        })
    }
}
