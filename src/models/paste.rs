//! Paste request and response models
//!
//! These mirror the paste service's JSON contract. Everything sent here is
//! already encrypted; the passphrase never appears in a request.

use serde::{Deserialize, Serialize};

use super::envelope::Envelope;
use super::expiration::Expiration;
use crate::error::{PastemeError, PastemeResult};

/// The encrypted title and body of a paste
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteContent {
    pub name: Envelope,
    pub body: Envelope,
}

/// An encrypted attachment (file name and file content)
///
/// The command-line client never attaches files, but the service expects
/// the `files` list to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEnvelope {
    pub name: Envelope,
    pub content: Envelope,
}

/// Request body for creating a paste
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paste {
    pub paste: PasteContent,

    pub files: Vec<FileEnvelope>,

    /// Ask the web viewer to apply syntax highlighting
    pub source_code: bool,

    pub self_destruct: bool,

    /// Zero when `self_destruct` is set
    pub expires_minutes: i64,
}

impl Paste {
    /// Assemble a paste from its two encrypted fields
    pub fn new(
        name: Envelope,
        body: Envelope,
        source_code: bool,
        expiration: Expiration,
    ) -> Self {
        Self {
            paste: PasteContent { name, body },
            files: Vec::new(),
            source_code,
            self_destruct: expiration.is_self_destruct(),
            expires_minutes: expiration.wire_minutes(),
        }
    }
}

/// Identifier block of a created paste
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPaste {
    pub uuid: String,
}

/// Successful response from the paste service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteResult {
    pub msg: String,
    pub paste: CreatedPaste,
}

impl PasteResult {
    /// Parse a 200 response body
    pub fn from_json(body: &str) -> PastemeResult<Self> {
        let result: PasteResult = serde_json::from_str(body)
            .map_err(|e| PastemeError::Protocol(format!("Unexpected response body: {}", e)))?;

        if result.paste.uuid.trim().is_empty() {
            return Err(PastemeError::Protocol(
                "Response did not contain a paste identifier".into(),
            ));
        }

        Ok(result)
    }

    pub fn uuid(&self) -> &str {
        &self.paste.uuid
    }
}
