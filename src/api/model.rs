use crate::geo::GeoData;
use serde::{Deserialize, Serialize, Serializer};
use std::net::IpAddr;

#[derive(Deserialize, Debug, Clone, Default, Ord, PartialOrd, Eq, PartialEq)]
pub(super) struct UpdateParams {
    pub domain: Option<String>,
    pub hash: Option<String>,
}

#[derive(Serialize, Debug, Clone, Default, Ord, PartialOrd, Eq, PartialEq)]
pub(super) struct UpdateResult {
    pub message: String,
}

/// Wire form of a `/get` response. Field names and the `"N/A"` placeholder
/// rendering are part of the API contract; `ip` is the only field that is
/// always populated.
#[derive(Serialize, Debug, Clone)]
pub(super) struct IpInfoResponse {
    #[serde(serialize_with = "or_na")]
    user_agent: Option<String>,
    ip: String,
    #[serde(serialize_with = "or_na")]
    hostname: Option<String>,
    #[serde(serialize_with = "or_na")]
    latitude: Option<f64>,
    #[serde(serialize_with = "or_na")]
    longitude: Option<f64>,
    #[serde(serialize_with = "or_na")]
    city: Option<String>,
    #[serde(serialize_with = "or_na")]
    region: Option<String>,
    #[serde(serialize_with = "or_na")]
    country: Option<String>,
    #[serde(serialize_with = "or_na")]
    country_code: Option<String>,
    #[serde(serialize_with = "or_na")]
    continent: Option<String>,
    is_eu: bool,
    #[serde(serialize_with = "or_na")]
    local_timezone: Option<String>,
    #[serde(serialize_with = "or_na")]
    isp: Option<String>,
}

impl IpInfoResponse {
    pub fn new(
        ip: IpAddr,
        user_agent: Option<String>,
        hostname: Option<String>,
        geo: GeoData,
    ) -> Self {
        Self {
            user_agent,
            ip: ip.to_string(),
            hostname,
            latitude: geo.latitude,
            longitude: geo.longitude,
            city: geo.city,
            region: geo.region,
            country: geo.country,
            country_code: geo.country_code,
            continent: geo.continent,
            is_eu: geo.is_eu,
            local_timezone: geo.timezone,
            isp: geo.isp,
        }
    }
}

/// Serialize `Some(v)` as `v` itself and `None` as the literal string `"N/A"`.
fn or_na<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_str("N/A"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn absent_fields_render_as_na() {
        let response = IpInfoResponse::new(
            IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)),
            None,
            None,
            GeoData::default(),
        );
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["ip"], "203.0.113.7");
        assert_eq!(value["user_agent"], "N/A");
        assert_eq!(value["hostname"], "N/A");
        assert_eq!(value["latitude"], "N/A");
        assert_eq!(value["isp"], "N/A");
        assert_eq!(value["is_eu"], false);
    }

    #[test]
    fn present_fields_keep_their_types() {
        let geo = GeoData {
            latitude: Some(52.37),
            longitude: Some(4.88),
            city: Some("Amsterdam".to_string()),
            is_eu: true,
            ..GeoData::default()
        };
        let response = IpInfoResponse::new(
            IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)),
            Some("curl/8.0.1".to_string()),
            Some("cust.example.net".to_string()),
            geo,
        );
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["latitude"], 52.37);
        assert_eq!(value["city"], "Amsterdam");
        assert_eq!(value["is_eu"], true);
        assert_eq!(value["user_agent"], "curl/8.0.1");
        assert_eq!(value["hostname"], "cust.example.net");
        // Untouched optional fields still degrade individually.
        assert_eq!(value["region"], "N/A");
    }
}
