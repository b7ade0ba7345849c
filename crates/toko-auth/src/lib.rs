//! # toko-auth
//!
//! Authentication primitives for the Toko catalog API: Argon2id credential
//! hashing, the HS256 session token codec, and the cookie session carrier.
//!
//! The flows that orchestrate these primitives live in `toko-api`; this
//! crate is deliberately free of HTTP handler and store concerns.

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{JwtDecoder, JwtEncoder, SessionClaims, TokenError};
pub use password::PasswordHasher;
pub use session::SessionCookie;
