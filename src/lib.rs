//! pasteme - client-side encrypted paste sharing
//!
//! Encrypts a paste's name and body on the client and submits only
//! ciphertext to the paste service. The key is derived from a random
//! passphrase that is shared out-of-band in the URL fragment of the
//! printed link, so the service can store the paste but never read it.
//!
//! # Architecture
//!
//! - `config`: Settings file and path resolution
//! - `error`: Error taxonomy and exit codes
//! - `crypto`: Passphrase generation, PBKDF2 key derivation, AES-256-GCM
//! - `models`: Envelopes, the paste request and the service response
//! - `services`: Input validation, sealing, HTTP submission
//! - `cli`: Flag definitions and the paste command handler
//! - `display`: Share link and success message formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use pasteme::crypto::{decrypt_string, encrypt_string, Passphrase};
//!
//! let passphrase = Passphrase::generate()?;
//! let envelope = encrypt_string(passphrase.as_str(), "buy milk")?;
//! assert_eq!(decrypt_string(passphrase.as_str(), &envelope)?, "buy milk");
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

#[cfg(test)]
mod test_support;

pub use error::{PastemeError, PastemeResult};
