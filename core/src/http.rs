//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! The core crate describes the request it wants as plain data and receives
//! the response as plain data; the `stornext` binary (or a test) performs
//! the actual GET. Every Web Services call is a GET with all inputs in the
//! query string, so a request is just its URL.

/// A GET request described as plain data.
///
/// Built by `StorNextClient::build_request`. The URL carries the
/// credentials, so it must not be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
}

/// An HTTP response described as plain data.
///
/// The body stays as raw bytes: the client prints whatever the server sent,
/// whatever its encoding or status.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
