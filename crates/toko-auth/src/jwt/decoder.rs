//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use super::claims::SessionClaims;

/// Why a presented token was rejected.
///
/// The HTTP layer collapses all three into one uniform unauthenticated
/// response; the distinction exists for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token's expiry is in the past.
    #[error("token has expired")]
    Expired,
    /// The signature does not match the claims.
    #[error("token signature is invalid")]
    InvalidSignature,
    /// The token is structurally invalid or carries unexpected claims.
    #[error("token is malformed")]
    Malformed,
}

/// Validates session tokens for one principal class.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from a signing secret and expected token purpose.
    pub fn new(secret: &str, subject: &'static str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // An `exp` even one second in the past must reject.
        validation.leeway = 0;
        validation.sub = Some(subject.to_string());
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a presented token string.
    ///
    /// Checks, in order: structure, signature, expiry, and the `sub`
    /// purpose claim. On success the claims carry the principal identity
    /// in the issuer field.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        Ok(token_data.claims)
    }
}
