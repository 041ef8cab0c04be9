//! Shared data models for the PromoVid backend.
//!
//! This crate provides Serde-serializable types for:
//! - Video type selection and the generation request/response contracts
//! - Scraped product data and the confirmation-page context
//! - The image gallery selection state
//! - The confirm-and-generate submission lifecycle
//! - Flash message banners

pub mod flash;
pub mod gallery;
pub mod product;
pub mod submission;
pub mod video;

// Re-export common types
pub use flash::{FlashCategory, FlashMessage};
pub use gallery::{Gallery, Tile, DEFAULT_SELECTED_COUNT};
pub use product::{ConfirmationContext, ProductInfo};
pub use submission::{SubmissionState, TransitionError};
pub use video::{GenerationRequest, GenerationResponse, UploadResponse, VideoType};
