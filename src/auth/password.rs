//! Password hashing with Argon2id (PHC string format).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::AppError;

/// Hash a plaintext password into a self-describing PHC string.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Check a plaintext password against a stored PHC string.
///
/// A wrong password is `Ok(false)`; only a malformed stored hash is an error.
pub fn verify_password(password: &str, expected_hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(expected_hash)
        .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::Internal(format!("Password verification failed: {}", e))),
    }
}
