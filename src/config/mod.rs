//! # Configuration
//!
//! Declarative HTTP client options shared by secret stores that talk to
//! remote identity providers. The host populates these structs from its
//! configuration file; [`HttpClientConfig::build_client`] turns them into a
//! `reqwest::Client` during store initialization.

pub mod tls;

use std::time::Duration;

use serde::Deserialize;

use crate::errors::{Error, Result};

pub use tls::TlsConfig;

fn default_timeout_secs() -> u64 {
    30
}

/// Generic HTTP client options for stores backed by remote endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Overall request timeout in seconds. Zero disables the timeout.
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds. Zero disables it.
    pub connect_timeout_secs: u64,

    /// Optional proxy URL (http, https or socks5).
    pub proxy_url: Option<String>,

    /// TLS options for the outbound connection.
    #[serde(flatten)]
    pub tls: TlsConfig,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: 0,
            proxy_url: None,
            tls: TlsConfig::default(),
        }
    }
}

impl HttpClientConfig {
    /// Build a `reqwest::Client` from these options.
    ///
    /// Fails on a malformed proxy URL or on unreadable/invalid TLS material.
    pub fn build_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();

        if self.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(self.timeout_secs));
        }
        if self.connect_timeout_secs > 0 {
            builder = builder.connect_timeout(Duration::from_secs(self.connect_timeout_secs));
        }
        if let Some(proxy_url) = &self.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| Error::config(format!("invalid proxy_url {proxy_url:?}: {e}")))?;
            builder = builder.proxy(proxy);
        }

        builder = self.tls.apply(builder)?;

        builder.build().map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpClientConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 0);
        assert!(config.proxy_url.is_none());
    }

    #[test]
    fn test_build_client_defaults() {
        let config = HttpClientConfig::default();
        assert!(config.build_client().is_ok());
    }

    #[test]
    fn test_build_client_rejects_bad_proxy() {
        let config = HttpClientConfig {
            proxy_url: Some("not a url".to_string()),
            ..Default::default()
        };

        let err = config.build_client().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("proxy_url"));
    }

    #[test]
    fn test_deserialize_partial_table() {
        let config: HttpClientConfig =
            serde_json::from_str(r#"{"timeout_secs": 5, "insecure_skip_verify": true}"#).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.connect_timeout_secs, 0);
        assert!(config.tls.insecure_skip_verify);
    }
}
