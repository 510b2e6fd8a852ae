//! Client settings for pasteme
//!
//! Where to send pastes, which host to put in share links, and an optional
//! request timeout. Values come from `config.json` and are then overridden
//! by command-line flags or their environment variables.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::ConfigPaths;
use crate::error::PastemeError;

/// Endpoint that accepts new pastes
pub const DEFAULT_API_URL: &str = "https://api.paste.me/api/paste/new";

/// Base of the share links printed after a successful paste
pub const DEFAULT_SHARE_URL: &str = "https://paste.me";

/// Client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// URL the paste is POSTed to
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Base URL of the web viewer used in share links
    #[serde(default = "default_share_url")]
    pub share_url: String,

    /// Request timeout in seconds; no timeout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_share_url() -> String {
    DEFAULT_SHARE_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            share_url: default_share_url(),
            timeout_secs: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if there is no file
    pub fn load_or_default(paths: &ConfigPaths) -> Result<Self, PastemeError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PastemeError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents).map_err(|e| {
            PastemeError::Config(format!(
                "Failed to parse settings file {}: {}",
                settings_path.display(),
                e
            ))
        })
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        share_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if let Some(share_url) = share_url {
            self.share_url = share_url;
        }
        if timeout_secs.is_some() {
            self.timeout_secs = timeout_secs;
        }
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
