//! Password hashing capability.
//!
//! Login only needs a yes/no answer for a password against a stored hash;
//! callers depend on [`CredentialHasher`] and never on the hash format.

use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

const SALT_LEN: usize = 16;

/// Hash and verify passwords.
pub trait CredentialHasher {
    /// Produce a storable hash for `plain`.
    fn hash(&self, plain: &str) -> Result<String, AuthError>;

    /// Check `plain` against a hash produced by [`hash`](Self::hash).
    fn verify(&self, plain: &str, stored: &str) -> bool;
}

/// Salted HMAC-SHA256, stored as `hex(salt)$hex(digest)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaltedSha256;

impl SaltedSha256 {
    fn mac(salt: &[u8], plain: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(salt).expect("HMAC can take keys of any size");
        mac.update(plain.as_bytes());
        mac
    }

    fn split(stored: &str) -> Result<(Vec<u8>, Vec<u8>), AuthError> {
        let (salt, digest) = stored.split_once('$').ok_or(AuthError::MalformedHash)?;
        let salt = hex::decode(salt).map_err(|_| AuthError::MalformedHash)?;
        let digest = hex::decode(digest).map_err(|_| AuthError::MalformedHash)?;
        Ok((salt, digest))
    }
}

impl CredentialHasher for SaltedSha256 {
    fn hash(&self, plain: &str) -> Result<String, AuthError> {
        if plain.is_empty() {
            return Err(AuthError::EmptyPassword);
        }
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        let digest = Self::mac(&salt, plain).finalize().into_bytes();
        Ok(format!("{}${}", hex::encode(salt), hex::encode(digest)))
    }

    fn verify(&self, plain: &str, stored: &str) -> bool {
        match Self::split(stored) {
            Ok((salt, digest)) => Self::mac(&salt, plain).verify_slice(&digest).is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_not_plain_text() {
        let hashed = SaltedSha256.hash("secure123").unwrap();
        assert_ne!(hashed, "secure123");
        assert!(hashed.contains('$'));
    }

    #[test]
    fn verify_accepts_only_the_right_password() {
        let hashed = SaltedSha256.hash("secure123").unwrap();
        assert!(SaltedSha256.verify("secure123", &hashed));
        assert!(!SaltedSha256.verify("wrongpass", &hashed));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = SaltedSha256.hash("secure123").unwrap();
        let b = SaltedSha256.hash("secure123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!SaltedSha256.verify("anything", ""));
        assert!(!SaltedSha256.verify("anything", "nothex$zz"));
        assert!(!SaltedSha256.verify("anything", "00ff"));
    }

    #[test]
    fn empty_password_is_rejected() {
        assert!(matches!(SaltedSha256.hash(""), Err(AuthError::EmptyPassword)));
    }
}
