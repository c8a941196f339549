//! Connection settings for the metadata controller.
//!
//! # Design
//! The client talks to one lab host with one set of credentials, so every
//! value here is a compile-time constant surfaced through
//! `ClientConfig::default()`. Tests build their own `ClientConfig` to point
//! at a mock server.
//!
//! The credentials travel as plaintext query parameters because that is how
//! the Web Services v2 API accepts them. They are visible in the printed URL
//! and in any proxy or server access log; only the outer TLS channel protects
//! them in transit.

use std::path::PathBuf;

/// API prefix on the metadata controller.
pub const DEFAULT_BASE_URL: &str = "https://mdc01.badoot.local/sws/v2";

/// PEM file holding the controller's self-signed certificate, relative to the
/// working directory.
pub const DEFAULT_CERT_PATH: &str = "./mycertfile.pem";

pub const DEFAULT_USERNAME: &str = "webuser";
pub const DEFAULT_PASSWORD: &str = "password";

/// Response encoding requested through the `format` query parameter.
pub const DEFAULT_FORMAT: &str = "json";

/// Everything needed to address and authenticate against the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub cert_path: PathBuf,
    pub username: String,
    pub password: String,
    pub format: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cert_path: PathBuf::from(DEFAULT_CERT_PATH),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default credentials and certificate against a different API prefix.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Host part of `base_url`, for log lines that must not carry credentials.
    pub fn host(&self) -> &str {
        let rest = self
            .base_url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.base_url);
        rest.split('/').next().unwrap_or(rest)
    }
}
