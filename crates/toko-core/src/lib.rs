//! # toko-core
//!
//! Core crate for the Toko catalog API. Contains the store contract trait,
//! configuration schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Toko crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
