//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Successful registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Confirmation message.
    pub message: String,
    /// The registered email address. Never the digest, never the id.
    pub email: String,
}

/// Successful login response.
///
/// The token is returned in the body in addition to the session cookie;
/// both channels are part of the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Fixed `"success"` marker.
    pub status: String,
    /// Confirmation message.
    pub message: String,
    /// The raw session token.
    pub token: String,
}

/// Profile response wrapping the full principal record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse<T: Serialize> {
    /// Fixed `"success"` marker.
    pub status: String,
    /// The principal record.
    pub data: T,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
