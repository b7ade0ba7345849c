//! Customer (user) principal records.

pub mod model;

pub use model::{NewUser, User};
