use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};

use crate::errors::ApiError;

/// Hash a plaintext password with Argon2id and a per-password random salt
///
/// Returns the PHC-format hash string for storage. The plaintext is never
/// persisted or logged.
pub fn hash_password(plaintext: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::internal_error(format!("Password hashing error: {}", e)))
}

/// Verify a plaintext password against a stored PHC-format hash
///
/// An unparsable stored hash counts as a verification failure.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed_hash)
        .is_ok()
}
