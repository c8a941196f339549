//! Error types for the StorNext client.
//!
//! # Design
//! There are only two failure classes: a usage mistake, which the binary
//! handles by printing usage and never turns into an error value, and a
//! fatal certificate or transport failure, represented here. Nothing is
//! retried, so the variants only need to say what failed and carry the
//! underlying message.

use std::fmt;
use std::path::PathBuf;

/// Fatal failures raised while loading the pinned certificate or performing
/// the request.
#[derive(Debug)]
pub enum ClientError {
    /// The certificate file could not be read.
    CertificateRead { path: PathBuf, source: std::io::Error },

    /// The certificate file was read but holds no usable PEM certificate.
    CertificateParse { path: PathBuf, message: String },

    /// Connection, TLS handshake or request failure.
    Transport(String),

    /// The response body could not be read to the end.
    BodyRead(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::CertificateRead { path, source } => {
                write!(f, "cannot read certificate {}: {source}", path.display())
            }
            ClientError::CertificateParse { path, message } => {
                write!(f, "cannot load PEM data from {}: {message}", path.display())
            }
            ClientError::Transport(msg) => write!(f, "request failed: {msg}"),
            ClientError::BodyRead(msg) => write!(f, "reading response body failed: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::CertificateRead { source, .. } => Some(source),
            _ => None,
        }
    }
}
