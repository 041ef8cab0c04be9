//! Local filesystem asset store.
//!
//! This crate provides:
//! - Saving uploaded and scraped images under the static root
//! - Saving generated videos
//! - Safe resolution of static-relative paths

pub mod error;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use store::{AssetStore, GENERATED_SUBDIR, SCRAPED_SUBDIR, UPLOADS_SUBDIR};
