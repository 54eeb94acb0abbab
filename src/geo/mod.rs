//! Best-effort IP enrichment.
//!
//! Everything in this module is advisory: a [`/get`][crate::api#get-get]
//! response is still useful with every enrichment field missing, so no
//! lookup here is ever allowed to fail the request. Missing databases,
//! unmatched IPs, and reverse-DNS timeouts all degrade to absent fields.
//!
//! [`maxmind::GeoDb`] reads the offline GeoLite2 City and ASN datasets;
//! [`rdns::SystemReverseDns`] attempts a bounded PTR lookup.

use std::net::IpAddr;
use std::sync::Arc;

pub mod maxmind;
pub mod rdns;

pub use maxmind::GeoDb;
pub use rdns::SystemReverseDns;

/// `DynReverseDns` is a type alias for a [`ReverseDns`] shared between
/// request handlers through an [`Arc`].
#[allow(clippy::module_name_repetitions)]
pub type DynReverseDns = Arc<dyn ReverseDns + Send + Sync>;

/// An async trait describing best-effort reverse hostname lookup. The only
/// observable effect is an optional value; implementations swallow every
/// failure.
#[async_trait::async_trait]
pub trait ReverseDns {
    async fn hostname(&self, ip: IpAddr) -> Option<String>;
}

/// Geolocation and ISP data for one IP. Every field is independently
/// optional; absence is a normal outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoData {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub continent: Option<String>,
    /// Whether the IP's registered country is an EU member. `false` when
    /// unknown.
    pub is_eu: bool,
    pub timezone: Option<String>,
    /// Autonomous system organization name from the ASN dataset.
    pub isp: Option<String>,
}
