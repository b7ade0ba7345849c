//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered customer in the Toko catalog.
///
/// `password_hash` is serialized under the `password` key because the
/// profile endpoint returns the stored record wholesale, digest included.
/// Existing clients read the digest under the `password` key, so the rename
/// stays until the wire contract is versioned.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique identifier, assigned by the store on creation.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Display username. No uniqueness enforced.
    pub username: String,
    /// Email address, the unique login handle.
    pub email: String,
    /// Phone number, digits only, 10-15 characters.
    pub phone: String,
    /// Argon2id password digest (PHC string). Never the plaintext.
    #[serde(rename = "password")]
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Display username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
