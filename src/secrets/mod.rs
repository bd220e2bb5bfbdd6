//! Secret management for the collector.
//!
//! A secret store maps string keys to sensitive byte values and resolves
//! them on demand. The host discovers stores through the
//! [`SecretStoreRegistry`], populates the returned instance from its
//! configuration file, calls [`SecretStore::init`] once, and then reads
//! secrets via [`SecretStore::get`] or a deferred [`SecretResolver`].
//!
//! # Builtin stores
//!
//! - **gcloud**: exchanges service-account credentials for short-lived,
//!   audience-scoped identity-provider tokens ([`stores::gcloud`]).
//!
//! # Security considerations
//!
//! - Secret values are wrapped in [`SecretString`] and never logged.
//! - Stores are read-only unless they explicitly implement `set`.

pub mod registry;
pub mod store;
pub mod stores;
pub mod types;

pub use registry::{SecretStoreRegistry, StoreFactory};
pub use store::{get_resolver, SecretResolver, SecretStore};
pub use stores::gcloud::GCloudTokenStore;
pub use types::SecretString;
