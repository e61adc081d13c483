//! Password hashing
//!
//! Argon2id with per-password salts, stored as PHC strings. Verification
//! reads the parameters back out of the stored string, so hashes survive
//! future parameter changes.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{EduError, EduResult};

/// Hash a password for storage.
///
/// Returns a PHC string (`$argon2id$v=19$...`) carrying the algorithm,
/// parameters, salt, and digest.
pub fn hash_password(password: &str) -> EduResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| EduError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Check a password attempt against a stored PHC string.
///
/// A malformed stored hash is an internal error; a wrong password is
/// just `false`.
pub fn verify_password(password: &str, stored: &str) -> EduResult<bool> {
    let parsed = PasswordHash::new(stored).map_err(|e| EduError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("right").unwrap();
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_is_phc_format() {
        let hash = hash_password("pw").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_malformed_stored_hash_errors() {
        assert!(verify_password("pw", "not-a-phc-string").is_err());
    }
}
