//! Secure random bytes from the operating system

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;

use crate::error::{PastemeError, PastemeResult};

/// Fill a fixed-size array from the OS CSPRNG
///
/// A failing entropy source is reported, never retried.
pub fn random_bytes<const N: usize>() -> PastemeResult<[u8; N]> {
    let mut buf = [0u8; N];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|e| PastemeError::Randomness(format!("OS random source failed: {}", e)))?;
    Ok(buf)
}
