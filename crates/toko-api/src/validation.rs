//! Input validation for registration fields.

use std::sync::LazyLock;

use regex::Regex;

/// Permissive RFC-lite email pattern: `local@domain` with `[A-Za-z0-9+_.-]`
/// local part and `[A-Za-z0-9.-]` domain.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9+_.-]+@[a-zA-Z0-9.-]+$").expect("valid email regex"));

/// Digits only, 10 to 15 characters.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10,15}$").expect("valid phone regex"));

/// Check an email against the permissive registration pattern.
pub fn valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check a phone number: digits only, length 10-15.
pub fn valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}
