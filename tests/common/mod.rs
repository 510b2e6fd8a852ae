//! One-shot HTTP responder standing in for the paste service

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};

use assert_cmd::Command;
use tempfile::TempDir;

/// What the client sent
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Accepts exactly one connection and answers it with a canned response
pub struct MockServer {
    addr: SocketAddr,
    handle: JoinHandle<CapturedRequest>,
}

impl MockServer {
    pub fn start(status_line: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let request = read_request(&mut stream);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream
                .write_all(response.as_bytes())
                .expect("write response");
            stream.flush().expect("flush response");
            request
        });

        Self { addr, handle }
    }

    pub fn url(&self) -> String {
        format!("http://{}/api/paste/new", self.addr)
    }

    /// Wait for the single request and return it
    pub fn finish(self) -> CapturedRequest {
        self.handle.join().expect("mock server thread")
    }
}

fn read_request(stream: &mut std::net::TcpStream) -> CapturedRequest {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("read request line");

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("read header");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    let length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = vec![0u8; length];
    reader.read_exact(&mut body).expect("read body");

    CapturedRequest {
        request_line: request_line.trim_end().to_string(),
        headers,
        body: String::from_utf8(body).expect("utf-8 body"),
    }
}

/// The binary with an isolated config dir and no proxy or endpoint overrides
pub fn pasteme(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pasteme").expect("binary");
    cmd.env("PASTEME_CONFIG_DIR", config_dir.path())
        .env_remove("PASTEME_API_URL")
        .env_remove("PASTEME_SHARE_URL")
        .env_remove("PASTEME_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    for var in [
        "HTTP_PROXY",
        "http_proxy",
        "HTTPS_PROXY",
        "https_proxy",
        "ALL_PROXY",
        "all_proxy",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Split the printed share link into (uuid, passphrase)
pub fn parse_share_link(stdout: &str) -> (String, String) {
    let url = stdout
        .lines()
        .find_map(|line| line.strip_prefix("Share this url to your friends: "))
        .expect("share link in output");
    let (path, passphrase) = url.split_once('#').expect("fragment in share link");
    let uuid = path.rsplit('/').next().expect("uuid in share link");
    (uuid.to_string(), passphrase.to_string())
}
