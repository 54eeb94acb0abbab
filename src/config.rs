use crate::dns::{DynRecordMutator, Rfc2136Mutator};
use crate::domains::{DynDomainStore, FileDomainStore, InMemoryDomainStore};
use crate::error::Error;
use crate::geo::GeoDb;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::BufReader;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub type SharedConfig = Arc<Config>;

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Address the HTTP API listens on.
    pub api_bind_addr: SocketAddr,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub api_timeout: Duration,
    /// Authoritative server that receives dynamic updates.
    pub dns_server_addr: SocketAddr,
    /// JSON domain registry path. When absent the daemon starts with an
    /// empty registry and every update is rejected as an invalid domain.
    pub domains_path: Option<String>,
    /// GeoLite2 City database path. Absent disables location enrichment.
    pub geoip_city_path: Option<String>,
    /// GeoLite2 ASN database path. Absent disables ISP enrichment.
    pub geoip_asn_path: Option<String>,
}

impl Config {
    /// Load a [`Config`] from the JSON file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the path can't be opened, or
    /// [`Error::InvalidJSON`] if its content doesn't parse.
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Build the domain registry named by the config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] / [`Error::InvalidJSON`] if a configured
    /// registry file can't be loaded.
    pub async fn domain_store(&self) -> Result<DynDomainStore, Error> {
        Ok(match &self.domains_path {
            Some(path) => Arc::new(FileDomainStore::try_from_file(path).await?),
            None => {
                tracing::warn!("no domains_path configured, starting with an empty registry");
                Arc::new(InMemoryDomainStore::default())
            }
        })
    }

    /// Open the GeoIP datasets named by the config. Unconfigured datasets are
    /// disabled, not errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GeoDbError`] if a configured database can't be opened.
    pub fn geo_db(&self) -> Result<GeoDb, Error> {
        GeoDb::open(
            self.geoip_city_path.as_deref(),
            self.geoip_asn_path.as_deref(),
        )
    }

    /// Connect the dynamic update client to the configured authoritative
    /// server.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DNSError`] if the client handshake fails.
    pub async fn record_mutator(&self) -> Result<DynRecordMutator, Error> {
        Ok(Arc::new(Rfc2136Mutator::connect(self.dns_server_addr).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_config_from_json() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"{{
                "api_bind_addr": "127.0.0.1:3000",
                "api_timeout": 30,
                "dns_server_addr": "127.0.0.1:5353",
                "domains_path": "domains.json",
                "geoip_city_path": null,
                "geoip_asn_path": null
            }}"#
        )
        .unwrap();

        let config = Config::try_from_file(f.path()).unwrap();
        assert_eq!(config.api_timeout, Duration::from_secs(30));
        assert_eq!(config.domains_path.as_deref(), Some("domains.json"));
        assert!(config.geoip_city_path.is_none());
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let err = Config::try_from_file("/nonexistent/config.json").unwrap_err();
        assert!(matches!(err, Error::IO(_)));
    }

    #[tokio::test]
    async fn no_domains_path_falls_back_to_empty_registry() {
        let config = Config {
            api_bind_addr: "127.0.0.1:0".parse().unwrap(),
            api_timeout: Duration::from_secs(5),
            dns_server_addr: "127.0.0.1:53".parse().unwrap(),
            domains_path: None,
            geoip_city_path: None,
            geoip_asn_path: None,
        };
        let store = config.domain_store().await.unwrap();
        assert!(store.lookup("home.example.com").await.unwrap().is_none());
    }
}
