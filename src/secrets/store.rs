//! Secret store contract and resolver types.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;

/// Host-facing contract for secret stores.
///
/// A store is populated declaratively from the host's configuration file,
/// initialized exactly once, and then serves read requests for the secrets
/// it knows about. The uninitialized → initialized transition is
/// irreversible; there is no shutdown or re-init path.
#[async_trait]
pub trait SecretStore: Send + Sync + fmt::Debug {
    /// Sample configuration snippet shown in generated documentation.
    fn sample_config(&self) -> &'static str;

    /// Validate configuration and prepare the store for use.
    async fn init(&mut self) -> Result<()>;

    /// Fetch the current value of the secret identified by `key`.
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Names of the secrets this store serves.
    async fn list(&self) -> Result<Vec<String>>;

    /// Store or update a secret.
    ///
    /// Read-only stores fail every call with
    /// [`Error::Unsupported`](crate::errors::Error::Unsupported).
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Deferred accessor for a single secret.
///
/// A resolver re-fetches the secret on every [`resolve`](Self::resolve)
/// call instead of capturing its value at registration time, so consumers
/// always observe the store's current value.
pub struct SecretResolver {
    store: Arc<dyn SecretStore>,
    key: String,
}

impl SecretResolver {
    pub fn new(store: Arc<dyn SecretStore>, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Fetch the secret's current value.
    ///
    /// The boolean reports whether a value was produced; it is `true`
    /// whenever the fetch succeeds.
    pub async fn resolve(&self) -> Result<(Vec<u8>, bool)> {
        let value = self.store.get(&self.key).await?;
        Ok((value, true))
    }
}

impl fmt::Debug for SecretResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretResolver").field("key", &self.key).finish()
    }
}

/// Obtain a resolver for `key` backed by a shared store handle.
pub fn get_resolver(store: &Arc<dyn SecretStore>, key: &str) -> Result<SecretResolver> {
    Ok(SecretResolver::new(Arc::clone(store), key))
}
