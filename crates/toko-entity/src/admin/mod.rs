//! Administrator principal records.

pub mod model;

pub use model::{Admin, NewAdmin};
