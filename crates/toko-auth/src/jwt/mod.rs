//! Session token encoding, decoding, and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::SessionClaims;
pub use decoder::{JwtDecoder, TokenError};
pub use encoder::JwtEncoder;

/// Token purpose for customer sessions.
pub const SUBJECT_USER: &str = "user";

/// Token purpose for administrator sessions.
pub const SUBJECT_ADMIN: &str = "admin";
