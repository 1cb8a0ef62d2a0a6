//! Minimal HTTP/1.1 server for download integration tests.
//!
//! Serves fixed bodies by path, returns 404 for unknown paths, counts
//! accepted connections, and can truncate a response mid-body to simulate a
//! dropped connection.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy, Default)]
pub struct ServerOptions {
    /// Advertise the full Content-Length but close the socket after this
    /// many body bytes (simulates a mid-stream connection drop).
    pub truncate_after: Option<usize>,
}

pub struct TestServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:12345".
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl TestServer {
    /// Full URL for `path` (which must start with '/').
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Number of connections accepted so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `bodies` keyed by request
/// path. The server runs until the process exits.
pub fn start(bodies: HashMap<String, Vec<u8>>) -> TestServer {
    start_with_options(bodies, ServerOptions::default())
}

/// Like `start` but with customized behavior (truncated responses, etc.).
pub fn start_with_options(bodies: HashMap<String, Vec<u8>>, opts: ServerOptions) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let bodies = Arc::new(bodies);
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            hits_srv.fetch_add(1, Ordering::SeqCst);
            let bodies = Arc::clone(&bodies);
            thread::spawn(move || handle(stream, &bodies, opts));
        }
    });
    TestServer {
        base_url: format!("http://127.0.0.1:{}", port),
        hits,
    }
}

fn handle(mut stream: std::net::TcpStream, bodies: &HashMap<String, Vec<u8>>, opts: ServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = match parse_path(request) {
        Some(p) => p,
        None => {
            let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
            return;
        }
    };

    let body = match bodies.get(path) {
        Some(b) => b,
        None => {
            let msg = b"not found";
            let response = format!(
                "HTTP/1.1 404 Not Found\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                msg.len()
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.write_all(msg);
            return;
        }
    };

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    match opts.truncate_after {
        Some(cut) if cut < body.len() => {
            let _ = stream.write_all(&body[..cut]);
            let _ = stream.shutdown(std::net::Shutdown::Both);
        }
        _ => {
            let _ = stream.write_all(body);
        }
    }
}

/// Returns the request path for a GET, or None for other methods.
fn parse_path(request: &str) -> Option<&str> {
    let mut parts = request.lines().next()?.split_whitespace();
    let method = parts.next()?;
    let path = parts.next()?;
    if !method.eq_ignore_ascii_case("GET") {
        return None;
    }
    Some(path)
}
