//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// Secrets are read once at startup and injected into the token codecs;
/// there is no runtime rotation. Rotating a secret invalidates every
/// outstanding token signed with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for signing user session tokens (HMAC-SHA256).
    #[serde(default = "default_user_secret")]
    pub user_secret: String,
    /// Secret key for signing admin session tokens (HMAC-SHA256).
    #[serde(default = "default_admin_secret")]
    pub admin_secret: String,
    /// Session token and cookie TTL in minutes. The cookie lifetime always
    /// mirrors the token expiry so the two cannot silently diverge.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: i64,
    /// Mark session cookies `Secure` (HTTPS-only transport).
    ///
    /// Disable only for local development without TLS.
    #[serde(default = "default_true")]
    pub cookie_secure: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            user_secret: default_user_secret(),
            admin_secret: default_admin_secret(),
            token_ttl_minutes: default_token_ttl(),
            cookie_secure: true,
        }
    }
}

fn default_user_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_admin_secret() -> String {
    "CHANGE_ME_TOO_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> i64 {
    30
}

fn default_true() -> bool {
    true
}
