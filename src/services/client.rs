//! Paste submission service
//!
//! Sends one sealed paste to the service with a single blocking POST and
//! interprets the answer. There is no retry.

use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config::Settings;
use crate::error::{PastemeError, PastemeResult};
use crate::models::{Paste, PasteResult};

/// HTTP client for the paste service
pub struct PasteClient {
    http: Client,
    api_url: String,
}

impl PasteClient {
    /// Build a client from settings, applying the optional timeout
    pub fn new(settings: &Settings) -> PastemeResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| PastemeError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_url: settings.api_url.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// POST the paste as JSON and return the service's answer
    pub fn submit(&self, paste: &Paste) -> PastemeResult<PasteResult> {
        info!("Submitting paste to {}", self.api_url);

        let response = self.http.post(&self.api_url).json(paste).send()?;
        let status = response.status();
        debug!("Paste service answered {}", status);

        let body = response.text()?;
        interpret_response(status, &body)
    }
}

/// Map a status and full response body onto the submission outcome
///
/// Only 200 counts as success; the server's own error detail is kept out of
/// the returned error.
pub fn interpret_response(status: StatusCode, body: &str) -> PastemeResult<PasteResult> {
    if status != StatusCode::OK {
        debug!("Rejected paste response body: {}", body);
        return Err(PastemeError::ServerRejected {
            status: status.as_u16(),
        });
    }

    PasteResult::from_json(body)
}
