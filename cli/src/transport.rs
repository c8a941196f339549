//! Blocking HTTPS transport that trusts only the controller's own certificate.
//!
//! The metadata controller serves a self-signed certificate, so the agent is
//! built with that certificate as its sole root instead of the platform or
//! webpki roots. The pinned file is loaded and checked before any
//! connection is attempted.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use rustls::pki_types::CertificateDer;
use stornext_core::{ClientError, HttpRequest, HttpResponse};
use ureq::tls::{parse_pem, Certificate, PemItem, RootCerts, TlsConfig};
use ureq::Agent;

pub struct Transport {
    agent: Agent,
}

impl Transport {
    /// Build an agent whose only trust roots are the certificates in the PEM
    /// file at `path`. Status codes are never turned into errors.
    pub fn with_pinned_certificate(path: &Path) -> Result<Self, ClientError> {
        let pem = fs::read(path).map_err(|source| ClientError::CertificateRead {
            path: path.to_path_buf(),
            source,
        })?;
        let certs = load_certificates(&pem).map_err(|message| ClientError::CertificateParse {
            path: path.to_path_buf(),
            message,
        })?;
        tracing::debug!(path = %path.display(), count = certs.len(), "loaded pinned certificate");

        let tls = TlsConfig::builder()
            .root_certs(RootCerts::Specific(Arc::new(certs)))
            .build();
        let agent = Agent::config_builder()
            .tls_config(tls)
            .http_status_as_error(false)
            .build()
            .new_agent();

        Ok(Self { agent })
    }

    /// Perform the GET and read the whole body as bytes, however large.
    pub fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        let mut response = self
            .agent
            .get(&request.url)
            .call()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| ClientError::BodyRead(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Extract every certificate from a PEM bundle, rejecting bundles with none
/// and certificates that cannot serve as a trust anchor.
fn load_certificates(pem: &[u8]) -> Result<Vec<Certificate<'static>>, String> {
    let mut roots = rustls::RootCertStore::empty();
    let mut certs = Vec::new();

    for item in parse_pem(pem) {
        let item = item.map_err(|e| e.to_string())?;
        if let PemItem::Certificate(cert) = item {
            roots
                .add(CertificateDer::from(cert.der()))
                .map_err(|e| format!("invalid certificate: {e}"))?;
            certs.push(cert.to_owned());
        }
    }

    if certs.is_empty() {
        return Err("no certificates found".to_string());
    }
    Ok(certs)
}
