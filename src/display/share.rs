//! Share link formatting
//!
//! The passphrase goes in the URL fragment, which browsers never send to
//! the server.

use crate::crypto::Passphrase;

/// Build `<base>/paste/<uuid>#<passphrase>`
pub fn share_url(base: &str, uuid: &str, passphrase: &Passphrase) -> String {
    format!(
        "{}/paste/{}#{}",
        base.trim_end_matches('/'),
        uuid,
        passphrase.as_str()
    )
}

/// Message printed after a successful paste
pub fn success_message(url: &str) -> String {
    format!(
        "Paste added successfully!\nShare this url to your friends: {}",
        url
    )
}
