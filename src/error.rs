//! Custom error types for pasteme
//!
//! This module defines the error hierarchy for the client using thiserror.
//! Every variant is terminal for a run; `exit_code` and `user_message`
//! decide how it is surfaced by the binary.

use thiserror::Error;

/// Message shown when the request could not be delivered or read back
pub const TRANSPORT_MESSAGE: &str = "There was some problem while sending the paste data. \
     Please try again later or contact the site administrator.";

/// Message shown when the server answered 200 with an unexpected body
pub const PROTOCOL_MESSAGE: &str =
    "We received an invalid response from the server. Please contact the site administrator.";

/// Message shown when the server refused the paste
pub const REJECTED_MESSAGE: &str = "There was some error while pasting your data. \
     Please try again later or contact the Paste.me admin!";

/// The main error type for pasteme operations
#[derive(Error, Debug)]
pub enum PastemeError {
    /// Missing name/body or an expiry outside the allowed set
    #[error("{0}")]
    Validation(String),

    /// The OS random source failed
    #[error("Randomness error: {0}")]
    Randomness(String),

    /// Cipher or key setup rejected its parameters
    #[error("Cipher initialisation error: {0}")]
    CipherInit(String),

    /// Recipient-side decryption failed (bad encoding or authentication)
    #[error("Decryption error: {0}")]
    Decryption(String),

    /// Network-level failure talking to the paste service
    #[error("Transport error: {0}")]
    Transport(String),

    /// The paste service answered with a non-200 status
    #[error("Server rejected the paste with status {status}")]
    ServerRejected { status: u16 },

    /// The paste service answered 200 with a body we cannot understand
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (reading standard input, settings file)
    #[error("I/O error: {0}")]
    Io(String),
}

impl PastemeError {
    /// Process exit status for this failure category
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Randomness(_) | Self::CipherInit(_) | Self::Decryption(_) => 3,
            Self::Config(_) => 4,
            Self::Io(_) => 5,
            Self::Transport(_) => 15,
            Self::Protocol(_) => 16,
            Self::ServerRejected { .. } => 17,
        }
    }

    /// Short message for the end user, without internal detail
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => TRANSPORT_MESSAGE.to_string(),
            Self::Protocol(_) => PROTOCOL_MESSAGE.to_string(),
            Self::ServerRejected { .. } => REJECTED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for PastemeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<reqwest::Error> for PastemeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result type alias for pasteme operations
pub type PastemeResult<T> = Result<T, PastemeError>;
