//! Password hashing and verification (Argon2id).
//!
//! Passwords are stored only as PHC-format strings produced by `argon2`
//! with its default memory-hard parameters. Verification parses the stored
//! hash and checks the supplied plaintext against it; a mismatch is a normal
//! `false`, not an error, so login can keep its generic failure message.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use thiserror::Error;

/// Errors from the hashing primitive itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    /// Hashing the plaintext failed.
    #[error("failed to hash password")]
    Hash,
    /// The stored hash is not a valid PHC string.
    #[error("stored password hash is malformed")]
    MalformedHash,
}

/// Hashes `password` with a fresh random salt, returning a PHC string.
///
/// # Errors
///
/// Returns `PasswordError::Hash` if the primitive fails.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| PasswordError::Hash)
}

/// Verifies `password` against a stored PHC string.
///
/// Returns `Ok(false)` on a mismatch; an error only means the stored hash
/// itself could not be parsed.
///
/// # Errors
///
/// Returns `PasswordError::MalformedHash` if `hash` is not a PHC string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|_| PasswordError::MalformedHash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
