//! TLS options for outbound HTTP connections.

use serde::Deserialize;

use crate::errors::{Error, Result};

/// TLS settings applied to the store's HTTP client.
///
/// `tls_cert` and `tls_key` must be set together; the pair is presented as
/// the client identity during the TLS handshake.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TlsConfig {
    /// Path to a PEM bundle of additional trusted root certificates.
    pub tls_ca: Option<String>,

    /// Path to a PEM client certificate.
    pub tls_cert: Option<String>,

    /// Path to the PEM private key matching `tls_cert`.
    pub tls_key: Option<String>,

    /// Skip server certificate verification. Test environments only.
    pub insecure_skip_verify: bool,
}

impl TlsConfig {
    /// Apply these settings to a client builder.
    pub(crate) fn apply(&self, mut builder: reqwest::ClientBuilder) -> Result<reqwest::ClientBuilder> {
        if let Some(ca_path) = &self.tls_ca {
            let pem = std::fs::read(ca_path)?;
            let cert = reqwest::Certificate::from_pem(&pem)?;
            builder = builder.add_root_certificate(cert);
        }

        match (&self.tls_cert, &self.tls_key) {
            (Some(cert_path), Some(key_path)) => {
                let mut pem = std::fs::read(cert_path)?;
                pem.extend(std::fs::read(key_path)?);
                let identity = reqwest::Identity::from_pem(&pem)?;
                builder = builder.identity(identity);
            }
            (None, None) => {}
            _ => {
                return Err(Error::config("tls_cert and tls_key must be set together"));
            }
        }

        if self.insecure_skip_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(builder)
    }
}
