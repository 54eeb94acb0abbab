//! A JSON file-backed implementation of the [`DomainStore`][super::DomainStore] trait.
//!
//! Wraps an [`InMemoryDomainStore`][super::memory::InMemoryDomainStore]
//! loaded once from a JSON registry file on disk. The file is the
//! administrative interface: provisioning or rotating a domain's secret means
//! editing it and restarting the daemon. Nothing writes it back.
use crate::domains::memory::InMemoryDomainStore;
use crate::domains::{DomainConfig, DomainStore};
use crate::error::Error;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// A read-only domain registry loaded from a JSON file of the form:
///
/// ```json
/// {
///   "domains": {
///     "home.example.com": { "zone": "example.com.", "secret": "..." }
///   }
/// }
/// ```
#[derive(Default, Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct FileDomainStore {
    domains: InMemoryDomainStore,
}

impl FileDomainStore {
    /// Load a [`FileDomainStore`] from the JSON registry located at the given
    /// path, or return an Error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJSON`] if the registry file is invalid.
    ///
    /// Returns [`Error::IO`] if the path can't be opened or read.
    pub async fn try_from_file(p: &str) -> Result<Self, Error> {
        let mut f = File::open(p).await?;
        let mut buf = vec![];
        f.read_to_end(&mut buf).await?;

        let domains: InMemoryDomainStore = serde_json::from_slice(&buf)?;
        Ok(Self { domains })
    }
}

#[async_trait::async_trait]
impl DomainStore for FileDomainStore {
    async fn lookup(&self, domain: &str) -> Result<Option<DomainConfig>, Error> {
        self.domains.lookup(domain).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn loads_registry_from_json() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"{{"domains":{{"home.example.com":{{"zone":"example.com.","secret":"s3cret"}}}}}}"#
        )
        .unwrap();

        let store = FileDomainStore::try_from_file(f.path().to_str().unwrap())
            .await
            .unwrap();
        let found = store.lookup("home.example.com").await.unwrap().unwrap();
        assert_eq!(found.zone, "example.com.");
        assert_eq!(found.secret, "s3cret");
        assert!(store.lookup("nope.example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let err = FileDomainStore::try_from_file("/nonexistent/registry.json")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::IO(_)));
    }

    #[tokio::test]
    async fn malformed_registry_is_a_json_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "not json").unwrap();

        let err = FileDomainStore::try_from_file(f.path().to_str().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidJSON(_)));
    }
}
