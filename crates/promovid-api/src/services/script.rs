//! Marketing script generation via the OpenAI chat completions API.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, ApiResult};

const DEFAULT_MODEL: &str = "gpt-4o";
const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Configuration for the script client.
#[derive(Debug, Clone)]
pub struct ScriptConfig {
    /// OpenAI API key; empty means script generation is unavailable
    pub api_key: String,
    /// Chat model name
    pub model: String,
    /// Completions endpoint URL
    pub base_url: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: COMPLETIONS_URL.to_string(),
        }
    }
}

impl ScriptConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or(defaults.api_key),
            model: std::env::var("OPENAI_MODEL").unwrap_or(defaults.model),
            base_url: std::env::var("OPENAI_API_URL").unwrap_or(defaults.base_url),
        }
    }
}

/// OpenAI chat client for script generation.
pub struct ScriptClient {
    config: ScriptConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl ScriptClient {
    /// Create a new script client.
    pub fn new(config: ScriptConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::new(ScriptConfig::from_env())
    }

    /// Generate a short promotional script from the product description.
    pub async fn generate_script(&self, description: &str) -> ApiResult<String> {
        if self.config.api_key.is_empty() {
            return Err(ApiError::internal(
                "OPENAI_API_KEY not configured. Cannot generate a script.",
            ));
        }

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a helpful assistant creating marketing scripts.".to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_script_prompt(description),
                },
            ],
            max_tokens: 100,
            temperature: 0.7,
        };

        debug!(
            "Requesting script from {} ({})",
            self.config.base_url, self.config.model
        );

        let response = self
            .client
            .post(&self.config.base_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::internal(format!("Script API request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ApiError::internal(format!(
                "Script API returned {status}: {error_text}"
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ApiError::internal(format!("Failed to parse script response: {e}")))?;

        let script = chat_response
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::internal("No content in script response"))?;

        Ok(script)
    }
}

/// Build the prompt for generating a promotional script.
pub fn build_script_prompt(description: &str) -> String {
    format!(
        "Create a short, enthusiastic, and catchy promotional script (2-4 sentences) \
         for a product based on the following information. Make it sound like someone \
         is presenting it in a short video clip.\n\n\
         Product Description/Features: {description}\n\n\
         Script:"
    )
}
