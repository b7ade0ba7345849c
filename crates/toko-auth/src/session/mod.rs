//! Cookie-based session carrier.

pub mod cookie;

pub use cookie::SessionCookie;
