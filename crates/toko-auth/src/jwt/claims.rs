//! Claims structure embedded in session tokens.

use serde::{Deserialize, Serialize};

use super::decoder::TokenError;

/// Claims payload of a session token.
///
/// A fixed, strictly-decoded structure: unknown fields are rejected and
/// every field is required. The issuer carries the principal id as a
/// string, following the registered-claim convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionClaims {
    /// Issuer — the principal id, stringified.
    pub iss: String,
    /// Subject — the token purpose (`"user"` or `"admin"`).
    pub sub: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl SessionClaims {
    /// Returns the principal id parsed from the issuer claim.
    ///
    /// A non-numeric issuer means the token was not minted by us and is
    /// treated as malformed.
    pub fn principal_id(&self) -> Result<i64, TokenError> {
        self.iss.parse::<i64>().map_err(|_| TokenError::Malformed)
    }
}
