//! # Fluxgate secret stores
//!
//! Secret-store plugins for the Fluxgate telemetry collector. A secret
//! store maps string keys to sensitive byte values the collector resolves
//! on demand, instead of keeping plaintext secrets in its configuration.
//!
//! The crate ships the plugin contract ([`SecretStore`]), an explicit
//! factory registry the host populates at startup ([`SecretStoreRegistry`]),
//! and the builtin `gcloud` store, which exchanges service-account
//! credentials for short-lived, audience-scoped identity-provider tokens.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use fluxgate_secrets::secrets::{get_resolver, GCloudTokenStore, SecretStore};
//!
//! #[tokio::main]
//! async fn main() -> fluxgate_secrets::Result<()> {
//!     // Stores start zero-valued and are populated from host configuration.
//!     let mut store = GCloudTokenStore::default();
//!     store.sts_audience = "https://example.com".to_string();
//!     store.service_account_file = "/etc/fluxgate/service-account.json".to_string();
//!     store.init().await?;
//!
//!     let store: Arc<dyn SecretStore> = Arc::new(store);
//!     let resolver = get_resolver(&store, "token")?;
//!     let (token, _) = resolver.resolve().await?;
//!     println!("fetched {} token bytes", token.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod creds;
pub mod errors;
pub mod secrets;

// Re-export commonly used types and traits
pub use config::HttpClientConfig;
pub use errors::{Error, Result};
pub use secrets::{SecretStore, SecretStoreRegistry};

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_available() {
        assert!(!VERSION.is_empty());
    }
}
