//! Paste command
//!
//! Bridges the parsed flags with the service layer: validate, encrypt,
//! submit, and build the share link.

use std::io::Read;

use clap::Args;
use log::{debug, info};

use super::input::{read_piped, resolve_body};
use crate::config::Settings;
use crate::crypto::Passphrase;
use crate::display::share_url;
use crate::error::PastemeResult;
use crate::models::PasteResult;
use crate::services::{require_name, seal_paste, PasteClient, PasteDraft};

/// Flags describing the paste itself
#[derive(Args, Debug, Clone, Default)]
pub struct PasteArgs {
    /// Insert the name of the paste here.
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Here you can insert the paste body or send it through stdin.
    ///
    /// Piped input takes precedence over this flag.
    #[arg(long, value_name = "TEXT")]
    pub body: Option<String>,

    /// Expiration time in minutes.
    ///
    /// Allowed values: 5, 10, 60, 1440, 10080, 43800. Not needed with --destroy.
    #[arg(long, value_name = "MINUTES", allow_negative_numbers = true)]
    pub expire: Option<i64>,

    /// Post the paste with a 'Self Destruct' flag. The link will work only once.
    #[arg(long)]
    pub destroy: bool,

    /// The paste is source code. Syntax highlighting will be applied.
    #[arg(long)]
    pub source: bool,
}

/// Flags overriding where the paste is sent
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Endpoint that accepts new pastes
    #[arg(long, value_name = "URL", env = "PASTEME_API_URL")]
    pub api_url: Option<String>,

    /// Base URL used in the printed share link
    #[arg(long, value_name = "URL", env = "PASTEME_SHARE_URL")]
    pub share_url: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECONDS", env = "PASTEME_TIMEOUT_SECS")]
    pub timeout: Option<u64>,
}

impl ConnectionArgs {
    /// Layer these flags over settings loaded from disk
    pub fn apply(&self, settings: Settings) -> Settings {
        settings.with_overrides(self.api_url.clone(), self.share_url.clone(), self.timeout)
    }
}

/// Outcome of a successful paste
#[derive(Debug)]
pub struct ShareLink {
    /// `<share_url>/paste/<uuid>#<passphrase>`
    pub url: String,
    pub result: PasteResult,
}

/// Handle the paste command
///
/// `piped` is standard input when it is not a terminal. It is only read
/// once the name has been validated.
pub fn handle_paste<R: Read>(
    args: &PasteArgs,
    settings: &Settings,
    piped: Option<R>,
) -> PastemeResult<ShareLink> {
    let name = args.name.clone().unwrap_or_default();
    require_name(&name)?;

    let piped_text = piped.map(read_piped).transpose()?;
    let body = resolve_body(piped_text, args.body.as_deref());

    let draft = PasteDraft::new(name, body, args.source, args.destroy, args.expire)?;
    debug!("Paste expiration: {}", draft.expiration());

    let passphrase = Passphrase::generate()?;
    let paste = seal_paste(&draft, &passphrase)?;

    let client = PasteClient::new(settings)?;
    let result = client.submit(&paste)?;
    info!("Paste created: {} ({})", result.uuid(), result.msg);

    let url = share_url(&settings.share_url, result.uuid(), &passphrase);
    Ok(ShareLink { url, result })
}
