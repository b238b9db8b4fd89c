//! Salted password hashing.

use rand::RngCore;
use serde::{Deserialize, Serialize};

const SALT_LEN: usize = 16;

/// Salted BLAKE3 digest of an account password.
///
/// Verification compares through `blake3::Hash`, whose equality is
/// constant-time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash {
    salt: [u8; SALT_LEN],
    digest: [u8; 32],
}

impl PasswordHash {
    pub fn new(password: &str) -> Self {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        Self::with_salt(salt, password)
    }

    fn with_salt(salt: [u8; SALT_LEN], password: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&salt);
        hasher.update(password.as_bytes());
        Self {
            salt,
            digest: *hasher.finalize().as_bytes(),
        }
    }

    pub fn verify(&self, candidate: &str) -> bool {
        let computed = Self::with_salt(self.salt, candidate);
        blake3::Hash::from(computed.digest) == blake3::Hash::from(self.digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_password_verifies() {
        let hash = PasswordHash::new("hunter2");
        assert!(hash.verify("hunter2"));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let hash = PasswordHash::new("hunter2");
        assert!(!hash.verify("hunter3"));
        assert!(!hash.verify(""));
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        let a = PasswordHash::new("hunter2");
        let b = PasswordHash::new("hunter2");
        assert_ne!(a, b);
        assert!(a.verify("hunter2"));
        assert!(b.verify("hunter2"));
    }
}
