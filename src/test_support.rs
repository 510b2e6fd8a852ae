//! Helpers shared by unit tests

use std::net::TcpListener;

use crate::config::Settings;

const PROXY_VARS: [&str; 6] = [
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// Settings whose endpoint is a local port nothing listens on
///
/// Proxy variables are cleared so the connection attempt really goes to
/// that port.
pub(crate) fn unreachable_settings() -> Settings {
    for var in PROXY_VARS {
        std::env::remove_var(var);
    }

    // Grab a free port and release it
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    Settings {
        api_url: format!("http://127.0.0.1:{}/api/paste/new", port),
        timeout_secs: Some(5),
        ..Settings::default()
    }
}
