//! Client for the avatar video generation service.
//!
//! The service exposes a D-ID-style "talks" API: create a talk from a text
//! script and a source image URL, then poll the talk until it reports
//! `done` (with a result URL) or `error`. This crate wraps create, poll
//! and result download behind one `generate` call.

pub mod client;
pub mod error;
pub mod types;

pub use client::{AvatarClient, AvatarClientConfig};
pub use error::{AvatarError, AvatarResult};
pub use types::{CreateTalkRequest, CreateTalkResponse, TalkScript, TalkStatusResponse};
