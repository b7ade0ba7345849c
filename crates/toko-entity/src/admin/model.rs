//! Admin entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A back-office administrator account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    /// Unique identifier, assigned by the store on creation.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address, the unique login handle.
    pub email: String,
    /// Argon2id password digest (PHC string).
    #[serde(rename = "password")]
    pub password_hash: String,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new admin record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAdmin {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
