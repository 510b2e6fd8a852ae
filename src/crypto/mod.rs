//! Cryptographic functions for pasteme
//!
//! AES-256-GCM with PBKDF2-HMAC-SHA256 key derivation. The service only
//! ever sees envelopes; the passphrase stays on the client.

pub mod encryption;
pub mod key_derivation;
pub mod passphrase;
pub mod random;

pub use encryption::{decrypt, decrypt_string, encrypt, encrypt_string, NONCE_SIZE};
pub use key_derivation::{derive_key, DerivedKey, KDF_ITERATIONS, SALT_SIZE};
pub use passphrase::Passphrase;
pub use random::random_bytes;
