//! Flash message banners.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Banner category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashCategory {
    Error,
    Success,
}

impl FlashCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashCategory::Error => "error",
            FlashCategory::Success => "success",
        }
    }
}

impl fmt::Display for FlashCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One dismissible banner rendered at page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub category: FlashCategory,
    pub message: String,
}

impl FlashMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Success,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str() {
        assert_eq!(FlashCategory::Error.as_str(), "error");
        assert_eq!(FlashCategory::Success.to_string(), "success");
    }

    #[test]
    fn test_constructors() {
        let flash = FlashMessage::error("Failed to scrape product data");
        assert_eq!(flash.category, FlashCategory::Error);
        assert_eq!(flash.message, "Failed to scrape product data");
    }
}
