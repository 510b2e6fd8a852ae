//! Data models for pasteme
//!
//! Encrypted field envelopes, the paste request sent to the service, the
//! service's response, and the expiration policy.

pub mod envelope;
pub mod expiration;
pub mod paste;

pub use envelope::Envelope;
pub use expiration::{is_valid_minutes, Expiration, VALID_EXPIRE_MINUTES};
pub use paste::{CreatedPaste, FileEnvelope, Paste, PasteContent, PasteResult};
