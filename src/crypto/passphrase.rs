//! Per-paste passphrase
//!
//! The passphrase is the only secret of a paste. It travels in the URL
//! fragment of the share link and is never sent to the service.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::random::random_bytes;
use crate::error::PastemeResult;

/// Bytes of OS randomness hashed into a passphrase
pub const PASSPHRASE_SEED_SIZE: usize = 28;

/// Length of the hex-encoded passphrase
pub const PASSPHRASE_LEN: usize = 64;

/// A 256-bit secret rendered as 64 lowercase hex characters
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Passphrase(String);

impl Passphrase {
    /// Generate a fresh passphrase: SHA-256 over 28 random bytes, hex-encoded
    pub fn generate() -> PastemeResult<Self> {
        let mut seed = random_bytes::<PASSPHRASE_SEED_SIZE>()?;
        let digest = Sha256::digest(seed);
        seed.zeroize();
        Ok(Self(hex::encode(digest)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Passphrase {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Keep the secret out of logs
impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Passphrase")
            .field("len", &self.0.len())
            .finish()
    }
}
