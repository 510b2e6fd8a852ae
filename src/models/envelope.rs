//! Envelope model
//!
//! The hex-encoded (salt, nonce, ciphertext) triple produced by encrypting a
//! single field. Field names follow the paste service's wire format, where
//! the ciphertext travels as `data`.

use serde::{Deserialize, Serialize};

use crate::error::{PastemeError, PastemeResult};

/// One encrypted field of a paste
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// AES-GCM output with the authentication tag appended (hex)
    #[serde(rename = "data")]
    pub ciphertext: String,

    /// Nonce used for this encryption (hex)
    pub iv: String,

    /// PBKDF2 salt used to derive this field's key (hex)
    pub salt: String,
}

impl Envelope {
    /// Build an envelope from raw bytes
    pub(crate) fn from_parts(salt: &[u8], iv: &[u8], ciphertext: &[u8]) -> Self {
        Self {
            ciphertext: hex::encode(ciphertext),
            iv: hex::encode(iv),
            salt: hex::encode(salt),
        }
    }

    /// Decode the salt from hex
    pub fn decode_salt(&self) -> PastemeResult<Vec<u8>> {
        decode_field("salt", &self.salt)
    }

    /// Decode the nonce from hex
    pub fn decode_iv(&self) -> PastemeResult<Vec<u8>> {
        decode_field("iv", &self.iv)
    }

    /// Decode the ciphertext from hex
    pub fn decode_ciphertext(&self) -> PastemeResult<Vec<u8>> {
        decode_field("ciphertext", &self.ciphertext)
    }
}

fn decode_field(field: &str, value: &str) -> PastemeResult<Vec<u8>> {
    hex::decode(value)
        .map_err(|e| PastemeError::Decryption(format!("Invalid {} encoding: {}", field, e)))
}
