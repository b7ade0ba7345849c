//! Binds session tokens to HTTP cookies.
//!
//! The cookie lifetime always mirrors the token TTL so carrier and token
//! expire together. Cookies are `HttpOnly` (script-inaccessible) and, unless
//! disabled for plain-HTTP development, `Secure`.

use axum::http::{HeaderMap, HeaderValue, header};

use toko_core::error::AppError;

/// Issues, revokes, and reads one named session cookie.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    /// Cookie name (`jwtUser`, `jwtAdmin`).
    name: &'static str,
    /// Lifetime in minutes, kept in lock-step with the token TTL.
    ttl_minutes: i64,
    /// Whether to mark the cookie `Secure`.
    secure: bool,
}

impl SessionCookie {
    /// Creates a carrier for the given cookie name.
    pub fn new(name: &'static str, ttl_minutes: i64, secure: bool) -> Self {
        Self {
            name,
            ttl_minutes,
            secure,
        }
    }

    /// Returns the cookie name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Builds the `Set-Cookie` header value binding a token to the client.
    pub fn attach(&self, token: &str) -> Result<HeaderValue, AppError> {
        let max_age = self.ttl_minutes * 60;
        let mut cookie = format!(
            "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
            self.name, token, max_age
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie)
            .map_err(|e| AppError::internal(format!("Failed to build session cookie: {e}")))
    }

    /// Builds the `Set-Cookie` header value that makes the client drop the
    /// cookie: empty value, already-expired lifetime.
    pub fn detach(&self) -> Result<HeaderValue, AppError> {
        let mut cookie = format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", self.name);
        if self.secure {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie)
            .map_err(|e| AppError::internal(format!("Failed to build session cookie: {e}")))
    }

    /// Extracts the raw token from the request's `Cookie` headers.
    ///
    /// Absence (or an empty value left over from a cleared cookie) is the
    /// unauthenticated state, not an error.
    pub fn read(&self, headers: &HeaderMap) -> Option<String> {
        for value in headers.get_all(header::COOKIE) {
            let Ok(raw) = value.to_str() else { continue };
            for pair in raw.split(';') {
                if let Some((name, token)) = pair.trim().split_once('=') {
                    if name == self.name && !token.is_empty() {
                        return Some(token.to_string());
                    }
                }
            }
        }
        None
    }
}
