//! Single-request HTTP server for exercising [`XClient`](super::XClient) in tests.
//!
//! The server accepts one connection, captures the raw request and answers with a
//! canned response, then shuts down.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use crate::config::Credentials;

use super::XClient;

pub(crate) struct TestServer {
    base_url: String,
    handle: JoinHandle<String>,
}

impl TestServer {
    /// Starts a server that answers one request with `status` (e.g. `"200 OK"`),
    /// the extra `headers` and a JSON `body`.
    pub(crate) fn respond(status: &str, headers: &[(&str, &str)], body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let mut response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n",
            status,
            body.len()
        );
        for (name, value) in headers {
            response.push_str(&format!("{}: {}\r\n", name, value));
        }
        response.push_str("\r\n");
        response.push_str(body);

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request
        });

        TestServer {
            base_url: format!("http://{}/2", addr),
            handle,
        }
    }

    /// A client pointed at this server.
    pub(crate) fn client(&self) -> XClient {
        let creds = Credentials {
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            access_token: "token".to_string(),
            access_token_secret: "token-secret".to_string(),
        };
        XClient::with_base_url(creds, self.base_url.clone()).unwrap()
    }

    /// Waits for the server thread and returns the raw request it received.
    pub(crate) fn request(self) -> String {
        self.handle.join().unwrap()
    }
}

/// Reads the request head and, if announced, a body of `content-length` bytes.
fn read_request(stream: &mut impl Read) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);

        let text = String::from_utf8_lossy(&data);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_length = text[..head_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if data.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}
