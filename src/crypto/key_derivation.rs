//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Each encrypted field gets its own 8-byte salt, so the same passphrase
//! yields a different AES key per field. The iteration count is part of
//! the format shared with the web viewer and must not change.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of the PBKDF2 salt in bytes
pub const SALT_SIZE: usize = 8;

/// PBKDF2 iteration count
pub const KDF_ITERATIONS: u32 = 1000;

/// Size of the derived key in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// A derived encryption key, wiped on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

/// Derive an AES-256 key from a passphrase and salt
pub fn derive_key(passphrase: &str, salt: &[u8]) -> DerivedKey {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, KDF_ITERATIONS, &mut key);
    DerivedKey { key }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: [u8; SALT_SIZE] = [1, 2, 3, 4, 5, 6, 7, 8];

    #[test]
    fn test_same_inputs_same_key() {
        let key1 = derive_key("test_passphrase", &SALT);
        let key2 = derive_key("test_passphrase", &SALT);
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_passphrase_different_key() {
        let key1 = derive_key("passphrase1", &SALT);
        let key2 = derive_key("passphrase2", &SALT);
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key("same_passphrase", &SALT);
        let key2 = derive_key("same_passphrase", &[8, 7, 6, 5, 4, 3, 2, 1]);
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }
}
