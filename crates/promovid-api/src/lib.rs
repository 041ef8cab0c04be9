//! Axum HTTP server for PromoVid.
//!
//! This crate provides:
//! - The intake and confirmation pages (askama templates)
//! - Image upload and video generation endpoints
//! - Static file serving for uploads, scraped images and finished videos

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod templates;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
