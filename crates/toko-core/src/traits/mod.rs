//! Core trait definitions shared between crates.

pub mod store;

pub use store::PrincipalStore;
