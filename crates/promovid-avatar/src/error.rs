//! Avatar client error types.

use thiserror::Error;

pub type AvatarResult<T> = Result<T, AvatarError>;

#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("Invalid API credential; expected 'email:key' format")]
    InvalidCredential,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Video generation failed: {0}")]
    GenerationFailed(String),

    #[error("Unexpected talk status: {0}")]
    UnexpectedStatus(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Video generation timed out after {0} seconds")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AvatarError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, AvatarError::Network(_))
    }
}
