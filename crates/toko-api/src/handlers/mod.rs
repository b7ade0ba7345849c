//! HTTP request handlers, organized by principal class.

pub mod admin;
pub mod health;
pub mod user;
