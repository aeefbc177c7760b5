use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

use crate::error::RepoError;

/// Argon2 digest of `plain` followed by the process-wide salt.
pub fn hash_password(plain: &str, salt: &str) -> Result<String, RepoError> {
    let per_user = SaltString::generate(&mut OsRng);
    let salted = format!("{plain}{salt}");
    let hash = Argon2::default()
        .hash_password(salted.as_bytes(), &per_user)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            RepoError::Hash(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

/// A malformed stored digest never matches.
pub fn verify_password(plain: &str, salt: &str, hash: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(p) => p,
        Err(e) => {
            error!(error = %e, "argon2 parse hash error");
            return false;
        }
    };
    let salted = format!("{plain}{salt}");
    Argon2::default()
        .verify_password(salted.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("Ivan123", "pepper").expect("hashing should succeed");
        assert!(verify_password("Ivan123", "pepper", &hash));
    }

    #[test]
    fn digest_is_not_the_plaintext() {
        let hash = hash_password("Ivan123", "pepper").unwrap();
        assert_ne!(hash, "Ivan123");
        assert!(!hash.contains("Ivan123"));
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password("correct-horse", "pepper").unwrap();
        assert!(!verify_password("wrong-horse", "pepper", &hash));
    }

    #[test]
    fn verify_rejects_wrong_salt() {
        let hash = hash_password("correct-horse", "pepper").unwrap();
        assert!(!verify_password("correct-horse", "salt", &hash));
    }

    #[test]
    fn same_password_hashes_differently_each_time() {
        let a = hash_password("Ivan123", "pepper").unwrap();
        let b = hash_password("Ivan123", "pepper").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn verify_is_false_on_malformed_hash() {
        assert!(!verify_password("anything", "pepper", "not-a-valid-hash"));
    }
}
