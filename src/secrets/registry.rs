//! Secret store registry.
//!
//! An explicit name → factory table populated during process setup. The
//! host looks up the factory matching a configuration section name and
//! receives a zero-valued store to populate before calling `init`. There
//! are no import-time side effects; builtin stores are registered by
//! calling [`SecretStoreRegistry::with_builtin`].

use std::collections::HashMap;

use tracing::info;

use super::store::SecretStore;
use super::stores::gcloud::GCloudTokenStore;

/// Constructor for a secret store.
///
/// Receives the store id from the host configuration and returns an
/// unconfigured instance.
pub type StoreFactory = fn(id: &str) -> Box<dyn SecretStore>;

/// Table of registered secret store factories.
#[derive(Default)]
pub struct SecretStoreRegistry {
    factories: HashMap<&'static str, StoreFactory>,
}

impl SecretStoreRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self { factories: HashMap::new() }
    }

    /// A registry preloaded with the builtin stores.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("gcloud", |_| Box::new(GCloudTokenStore::default()));
        registry
    }

    /// Register a factory under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &'static str, factory: StoreFactory) {
        info!(store = name, "registering secret store factory");
        self.factories.insert(name, factory);
    }

    /// Instantiate a zero-valued store for `name`, or `None` when no
    /// factory is registered under that name.
    pub fn create(&self, name: &str, id: &str) -> Option<Box<dyn SecretStore>> {
        self.factories.get(name).map(|factory| factory(id))
    }

    /// Whether a factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered store names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for SecretStoreRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretStoreRegistry").field("stores", &self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tracing_test::traced_test;

    #[test]
    fn test_empty_registry() {
        let registry = SecretStoreRegistry::new();
        assert!(registry.names().is_empty());
        assert!(!registry.contains("gcloud"));
        assert!(registry.create("gcloud", "default").is_none());
    }

    #[test]
    fn test_builtin_registry_knows_gcloud() {
        let registry = SecretStoreRegistry::with_builtin();
        assert!(registry.contains("gcloud"));
        assert_eq!(registry.names(), vec!["gcloud"]);
    }

    #[tokio::test]
    async fn test_factory_produces_zero_valued_store() {
        let registry = SecretStoreRegistry::with_builtin();
        let mut store = registry.create("gcloud", "default").expect("factory registered");

        // Zero-valued: not yet configured, so init must reject it.
        let err = store.init().await.unwrap_err();
        assert!(err.to_string().contains("is required"));

        let list = store.list().await.unwrap();
        assert_eq!(list, vec!["token".to_string()]);
    }

    #[traced_test]
    #[test]
    fn test_registration_is_logged() {
        let _registry = SecretStoreRegistry::with_builtin();
        assert!(logs_contain("registering secret store factory"));
    }
}
