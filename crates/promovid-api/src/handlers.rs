pub mod health;
pub mod pages;
pub mod upload;
pub mod video;

pub use health::{health, ready};
