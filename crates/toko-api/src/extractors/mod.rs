//! Axum extractors.

pub mod auth;
pub mod body;

pub use auth::{AdminSession, UserSession};
pub use body::ApiJson;
