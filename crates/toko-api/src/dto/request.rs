//! Request DTOs.
//!
//! Every field defaults to an empty string so that a missing JSON key and an
//! explicitly empty value take the same path through the emptiness checks,
//! keeping the missing-field error in the 400 class.

use serde::{Deserialize, Serialize};

/// Customer registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Display username.
    #[serde(default)]
    pub username: String,
    /// Email address, the future login handle.
    #[serde(default)]
    pub email: String,
    /// Phone number, digits only.
    #[serde(default, rename = "phone_no")]
    pub phone_no: String,
    /// Plaintext password; hashed before it reaches any store.
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    /// True when any required field is missing or empty.
    pub fn has_empty_field(&self) -> bool {
        self.name.is_empty()
            || self.username.is_empty()
            || self.email.is_empty()
            || self.phone_no.is_empty()
            || self.password.is_empty()
    }
}

/// Login request body, shared by customers and administrators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email login handle.
    #[serde(default)]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

/// Administrator registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminRegisterRequest {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

impl AdminRegisterRequest {
    /// True when any required field is missing or empty.
    pub fn has_empty_field(&self) -> bool {
        self.name.is_empty() || self.email.is_empty() || self.password.is_empty()
    }
}
