//! # toko-api
//!
//! HTTP API layer for the Toko catalog: shared application state, route
//! definitions, request/response DTOs, session extractors, and the mapping
//! from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;
pub mod validation;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
