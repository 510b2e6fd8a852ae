//! AES-256-GCM encryption/decryption
//!
//! Seals one field of a paste into an [`Envelope`]. Every call draws a fresh
//! salt and nonce, so the same plaintext and passphrase never produce the
//! same envelope twice.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};

use super::key_derivation::{derive_key, SALT_SIZE};
use super::random::random_bytes;
use crate::error::{PastemeError, PastemeResult};
use crate::models::Envelope;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag appended to the ciphertext
pub const TAG_SIZE: usize = 16;

/// Encrypt plaintext bytes under a key derived from `passphrase`
pub fn encrypt(passphrase: &str, plaintext: &[u8]) -> PastemeResult<Envelope> {
    let salt = random_bytes::<SALT_SIZE>()?;
    let nonce_bytes = random_bytes::<NONCE_SIZE>()?;

    let key = derive_key(passphrase, &salt);
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| PastemeError::CipherInit(format!("Failed to create cipher: {}", e)))?;

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|e| PastemeError::CipherInit(format!("Encryption failed: {}", e)))?;

    Ok(Envelope::from_parts(&salt, &nonce_bytes, &ciphertext))
}

/// Decrypt an envelope with the passphrase it was sealed under
///
/// Any change to the ciphertext or tag fails authentication.
pub fn decrypt(passphrase: &str, envelope: &Envelope) -> PastemeResult<Vec<u8>> {
    let salt = envelope.decode_salt()?;
    if salt.len() != SALT_SIZE {
        return Err(PastemeError::Decryption(format!(
            "Invalid salt size: expected {}, got {}",
            SALT_SIZE,
            salt.len()
        )));
    }

    let nonce_bytes = envelope.decode_iv()?;
    if nonce_bytes.len() != NONCE_SIZE {
        return Err(PastemeError::Decryption(format!(
            "Invalid nonce size: expected {}, got {}",
            NONCE_SIZE,
            nonce_bytes.len()
        )));
    }

    let ciphertext = envelope.decode_ciphertext()?;

    let key = derive_key(passphrase, &salt);
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| PastemeError::CipherInit(format!("Failed to create cipher: {}", e)))?;

    cipher
        .decrypt(Nonce::from_slice(&nonce_bytes), ciphertext.as_ref())
        .map_err(|_| {
            PastemeError::Decryption("authentication failed: wrong passphrase or corrupted data".into())
        })
}

/// Encrypt a string
pub fn encrypt_string(passphrase: &str, plaintext: &str) -> PastemeResult<Envelope> {
    encrypt(passphrase, plaintext.as_bytes())
}

/// Decrypt to a string
pub fn decrypt_string(passphrase: &str, envelope: &Envelope) -> PastemeResult<String> {
    let plaintext = decrypt(passphrase, envelope)?;
    String::from_utf8(plaintext)
        .map_err(|e| PastemeError::Decryption(format!("Invalid UTF-8 in decrypted data: {}", e)))
}
