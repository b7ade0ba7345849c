//! Session token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use toko_core::error::AppError;

use super::claims::SessionClaims;

/// Creates signed session tokens for one principal class.
///
/// The signing secret is injected at construction and immutable afterwards.
/// One encoder exists per principal class (user, admin), each with its own
/// secret and fixed subject.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in minutes.
    ttl_minutes: i64,
    /// Fixed token purpose written into the `sub` claim.
    subject: &'static str,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_minutes", &self.ttl_minutes)
            .field("subject", &self.subject)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from a signing secret, TTL, and token purpose.
    pub fn new(secret: &str, ttl_minutes: i64, subject: &'static str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl_minutes,
            subject,
        }
    }

    /// Issues a signed token asserting the given principal identity.
    ///
    /// Returns the encoded token together with its expiry so the session
    /// carrier can keep the cookie lifetime in lock-step.
    pub fn issue(&self, principal_id: i64) -> Result<(String, DateTime<Utc>), AppError> {
        let expires_at = Utc::now() + chrono::Duration::minutes(self.ttl_minutes);

        let claims = SessionClaims {
            iss: principal_id.to_string(),
            sub: self.subject.to_string(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok((token, expires_at))
    }
}
