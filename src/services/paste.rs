//! Paste preparation service
//!
//! Validates user input and seals it into a [`Paste`] ready for submission.
//! Nothing here touches the network.

use log::debug;

use crate::crypto::{encrypt_string, Passphrase};
use crate::error::{PastemeError, PastemeResult};
use crate::models::{Expiration, Paste};

/// Validated, still-plaintext paste
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteDraft {
    name: String,
    body: String,
    source_code: bool,
    expiration: Expiration,
}

impl PasteDraft {
    /// Validate the inputs in the order the user is told about them:
    /// name, then body, then expiry.
    pub fn new(
        name: impl Into<String>,
        body: impl Into<String>,
        source_code: bool,
        destroy: bool,
        expire: Option<i64>,
    ) -> PastemeResult<Self> {
        let name = name.into();
        require_name(&name)?;

        let body = body.into();
        if body.is_empty() {
            return Err(PastemeError::Validation(
                "Your paste has a length of 0. Try again, but this time try to put some content."
                    .into(),
            ));
        }

        let expiration = Expiration::from_flags(destroy, expire)?;

        Ok(Self {
            name,
            body,
            source_code,
            expiration,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn expiration(&self) -> Expiration {
        self.expiration
    }
}

/// Reject an empty paste name
///
/// Exposed so callers can fail before blocking on standard input.
pub fn require_name(name: &str) -> PastemeResult<()> {
    if name.is_empty() {
        return Err(PastemeError::Validation(
            "Please provide a name for your paste. Use the --help if in doubt.".into(),
        ));
    }
    Ok(())
}

/// Encrypt the name and body of a draft under one passphrase
///
/// Each field is sealed separately and so gets its own salt and nonce.
pub fn seal_paste(draft: &PasteDraft, passphrase: &Passphrase) -> PastemeResult<Paste> {
    debug!("Encrypting paste name ({} bytes)", draft.name.len());
    let name = encrypt_string(passphrase.as_str(), &draft.name)?;

    debug!("Encrypting paste body ({} bytes)", draft.body.len());
    let body = encrypt_string(passphrase.as_str(), &draft.body)?;

    Ok(Paste::new(name, body, draft.source_code, draft.expiration))
}
