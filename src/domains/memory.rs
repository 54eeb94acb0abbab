use crate::domains::{DomainConfig, DomainStore};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct InMemoryDomainStore {
    domains: HashMap<String, DomainConfig>,
}

impl InMemoryDomainStore {
    /// Add or replace the config entry for a domain.
    pub fn insert(&mut self, domain: impl Into<String>, config: DomainConfig) {
        self.domains.insert(domain.into(), config);
    }
}

#[async_trait::async_trait]
impl DomainStore for InMemoryDomainStore {
    async fn lookup(&self, domain: &str) -> Result<Option<DomainConfig>, Error> {
        Ok(self.domains.get(domain).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_hit_and_miss() {
        let mut store = InMemoryDomainStore::default();
        store.insert(
            "home.example.com",
            DomainConfig {
                zone: "example.com.".to_string(),
                secret: "s3cret".to_string(),
            },
        );

        let found = store.lookup("home.example.com").await.unwrap();
        assert_eq!(found.unwrap().zone, "example.com.");

        let missing = store.lookup("other.example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn insert_replaces_existing_entry() {
        let mut store = InMemoryDomainStore::default();
        let entry = |secret: &str| DomainConfig {
            zone: "example.com.".to_string(),
            secret: secret.to_string(),
        };
        store.insert("home.example.com", entry("old"));
        store.insert("home.example.com", entry("new"));

        let found = store.lookup("home.example.com").await.unwrap().unwrap();
        assert_eq!(found.secret, "new");
    }
}
