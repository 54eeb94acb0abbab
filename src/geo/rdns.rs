//! Best-effort reverse hostname lookup.

use crate::error::Error;
use crate::geo::ReverseDns;
use std::net::IpAddr;
use std::time::Duration;
use tokio::time::timeout;
use trust_dns_resolver::TokioAsyncResolver;

/// Hard ceiling on the PTR round-trip. Enrichment isn't worth keeping a
/// caller waiting longer than this.
const RDNS_TIMEOUT: Duration = Duration::from_secs(3);

/// A [`ReverseDns`] implementation backed by the host's configured stub
/// resolver.
pub struct SystemReverseDns {
    resolver: TokioAsyncResolver,
}

impl SystemReverseDns {
    /// Build a resolver from the system configuration (`/etc/resolv.conf` on
    /// unix hosts).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResolverError`] if the system resolver configuration
    /// can't be read.
    pub fn from_system_conf() -> Result<Self, Error> {
        Ok(Self {
            resolver: TokioAsyncResolver::tokio_from_system_conf()?,
        })
    }
}

#[async_trait::async_trait]
impl ReverseDns for SystemReverseDns {
    /// PTR-resolve `ip`, returning the first name without its trailing dot.
    /// NXDOMAIN, timeouts and malformed answers all collapse to `None`.
    async fn hostname(&self, ip: IpAddr) -> Option<String> {
        let lookup = timeout(RDNS_TIMEOUT, self.resolver.reverse_lookup(ip))
            .await
            .ok()?
            .ok()?;
        lookup
            .iter()
            .next()
            .map(|name| name.to_utf8().trim_end_matches('.').to_string())
    }
}
