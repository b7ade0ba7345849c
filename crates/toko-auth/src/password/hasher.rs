//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use toko_core::error::AppError;

/// Handles password hashing and verification using Argon2id.
///
/// Digests are PHC strings carrying their own salt and cost parameters, so
/// repeated hashes of the same plaintext differ byte-wise but all verify.
#[derive(Debug, Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    ///
    /// Fails only on catastrophic conditions such as entropy-source failure;
    /// that surfaces as an internal error.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let digest = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(digest.to_string())
    }

    /// Verifies a plaintext password against a stored digest.
    ///
    /// A wrong password and a malformed stored digest both return `false`;
    /// callers must not be able to tell the two apart. The comparison is
    /// constant-time inside the argon2 implementation.
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            tracing::warn!("stored password digest is not a valid PHC string");
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
