//! Video type and the generation endpoint contracts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of promotional video to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VideoType {
    /// Product showcase built from the selected gallery images
    #[default]
    Product,
    /// Talking avatar presenting the script
    Avatar,
}

impl VideoType {
    /// All available video types.
    pub const ALL: &'static [VideoType] = &[VideoType::Product, VideoType::Avatar];

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoType::Product => "product",
            VideoType::Avatar => "avatar",
        }
    }
}

impl fmt::Display for VideoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VideoType {
    type Err = VideoTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "product" => Ok(VideoType::Product),
            "avatar" => Ok(VideoType::Avatar),
            _ => Err(VideoTypeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown video type: {0}")]
pub struct VideoTypeParseError(String);

/// Body of `POST /create_video_route`.
///
/// `selected_images` is exactly the set of selected gallery tiles, in
/// gallery order. An empty selection is a well-formed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub selected_images: Vec<String>,
    pub product_description: String,
    pub video_type: VideoType,
}

/// Body of the generation endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResponse {
    pub fn ok(video_url: impl Into<String>) -> Self {
        Self {
            success: true,
            video_url: Some(video_url.into()),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            video_url: None,
            error: Some(message.into()),
        }
    }
}

/// Body of the `POST /upload_image` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResponse {
    pub fn ok(relative_path: impl Into<String>) -> Self {
        Self {
            success: true,
            relative_path: Some(relative_path.into()),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            relative_path: None,
            error: Some(message.into()),
        }
    }
}
