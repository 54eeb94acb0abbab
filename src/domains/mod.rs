//! Per-domain configuration storage.
//!
//! Each managed domain has one [`DomainConfig`] entry naming the zone that
//! owns it and the shared secret its client was provisioned with. Entries are
//! created and rotated by an administrator out of band; the service itself
//! only ever reads them.
//!
//! Two implementations are provided, [`memory::InMemoryDomainStore`] and
//! [`file::FileDomainStore`]. The former backs tests and the no-registry
//! fallback; the latter loads its entries from a JSON file at startup.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod file;
pub mod memory;

#[allow(clippy::module_name_repetitions)]
pub use file::FileDomainStore;
#[allow(clippy::module_name_repetitions)]
pub use memory::InMemoryDomainStore;

/// `DynDomainStore` is a type alias for a [`DomainStore`] shared between
/// request handlers through an [`Arc`]. Stores are read-only at runtime, so
/// no lock is needed.
#[allow(clippy::module_name_repetitions)]
pub type DynDomainStore = Arc<dyn DomainStore + Send + Sync>;

/// Configuration for one managed domain, keyed by the domain's FQDN.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct DomainConfig {
    /// Identifier of the authoritative zone that owns the domain. Used both
    /// as proof-digest input and to address the record mutation.
    pub zone: String,

    /// Shared secret provisioned to the domain's client out of band. Never
    /// transmitted over the wire in either direction.
    pub secret: String,
}

/// An async trait describing read access to per-domain configuration.
#[async_trait::async_trait]
pub trait DomainStore {
    /// Look up the configuration for the given domain, `None` if the domain
    /// isn't registered.
    async fn lookup(&self, domain: &str) -> Result<Option<DomainConfig>, Error>;
}
