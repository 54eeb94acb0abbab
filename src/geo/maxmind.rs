//! GeoLite2 dataset lookups.
//!
//! Two independent MaxMind readers, one for the City dataset (location,
//! country, timezone) and one for the ASN dataset (ISP organization). Either
//! or both may be absent; a missing reader just leaves its fields unset.

use crate::error::Error;
use crate::geo::GeoData;
use maxminddb::{geoip2, Reader};
use std::collections::BTreeMap;
use std::net::IpAddr;

pub struct GeoDb {
    city: Option<Reader<Vec<u8>>>,
    asn: Option<Reader<Vec<u8>>>,
}

fn english(names: Option<BTreeMap<&str, &str>>) -> Option<String> {
    names.and_then(|n| n.get("en").map(|s| (*s).to_string()))
}

fn fill_city(data: &mut GeoData, city: geoip2::City<'_>) {
    if let Some(location) = city.location {
        data.latitude = location.latitude;
        data.longitude = location.longitude;
        data.timezone = location.time_zone.map(str::to_string);
    }
    data.city = english(city.city.and_then(|c| c.names));
    data.region = english(
        city.subdivisions
            .and_then(|s| s.into_iter().next())
            .and_then(|s| s.names),
    );
    if let Some(country) = city.country {
        data.country_code = country.iso_code.map(str::to_string);
        data.country = english(country.names);
    }
    data.continent = english(city.continent.and_then(|c| c.names));
    data.is_eu = city
        .registered_country
        .and_then(|c| c.is_in_european_union)
        .unwrap_or(false);
}

fn fill_asn(data: &mut GeoData, asn: geoip2::Asn<'_>) {
    data.isp = asn.autonomous_system_organization.map(str::to_string);
}

impl GeoDb {
    /// Open the configured GeoLite2 databases. `None` paths are allowed and
    /// leave the corresponding dataset disabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GeoDbError`] if a configured path can't be opened or
    /// isn't a valid MaxMind database.
    pub fn open(city_path: Option<&str>, asn_path: Option<&str>) -> Result<Self, Error> {
        let city = city_path.map(|p| Reader::open_readfile(p)).transpose()?;
        let asn = asn_path.map(|p| Reader::open_readfile(p)).transpose()?;
        Ok(Self { city, asn })
    }

    /// Look `ip` up in both datasets. Never fails: an unmatched IP or a
    /// disabled dataset yields absent fields.
    #[must_use]
    pub fn lookup(&self, ip: IpAddr) -> GeoData {
        let mut data = GeoData::default();

        if let Some(reader) = &self.city {
            if let Ok(city) = reader.lookup::<geoip2::City>(ip) {
                fill_city(&mut data, city);
            }
        }

        if let Some(reader) = &self.asn {
            if let Ok(asn) = reader.lookup::<geoip2::Asn>(ip) {
                fill_asn(&mut data, asn);
            }
        }

        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    // The geoip2 model types deserialize from plain serde data, which lets
    // the extraction run against realistic records without a database file.
    const CITY_JSON: &str = r#"{
        "city": {"names": {"en": "Amsterdam"}},
        "location": {"latitude": 52.37, "longitude": 4.88, "time_zone": "Europe/Amsterdam"},
        "country": {"iso_code": "NL", "names": {"en": "Netherlands"}},
        "continent": {"names": {"en": "Europe"}},
        "registered_country": {"is_in_european_union": true},
        "subdivisions": [{"names": {"en": "North Holland"}}]
    }"#;

    #[test]
    fn city_record_populates_location_fields_without_asn_data() {
        let city: geoip2::City = serde_json::from_str(CITY_JSON).unwrap();
        let mut data = GeoData::default();
        fill_city(&mut data, city);

        assert_eq!(data.latitude, Some(52.37));
        assert_eq!(data.longitude, Some(4.88));
        assert_eq!(data.city.as_deref(), Some("Amsterdam"));
        assert_eq!(data.region.as_deref(), Some("North Holland"));
        assert_eq!(data.country.as_deref(), Some("Netherlands"));
        assert_eq!(data.country_code.as_deref(), Some("NL"));
        assert_eq!(data.continent.as_deref(), Some("Europe"));
        assert_eq!(data.timezone.as_deref(), Some("Europe/Amsterdam"));
        assert!(data.is_eu);
        // No ASN match: the ISP field stays absent.
        assert!(data.isp.is_none());
    }

    #[test]
    fn asn_record_populates_isp_independently() {
        let asn: geoip2::Asn = serde_json::from_str(
            r#"{"autonomous_system_number": 64496, "autonomous_system_organization": "Example Carrier B.V."}"#,
        )
        .unwrap();
        let mut data = GeoData::default();
        fill_asn(&mut data, asn);

        assert_eq!(data.isp.as_deref(), Some("Example Carrier B.V."));
        assert!(data.city.is_none());
        assert!(data.latitude.is_none());
    }

    #[test]
    fn sparse_city_record_degrades_field_by_field() {
        let city: geoip2::City = serde_json::from_str(r#"{"location": {"latitude": 52.37}}"#).unwrap();
        let mut data = GeoData::default();
        fill_city(&mut data, city);

        assert_eq!(data.latitude, Some(52.37));
        assert!(data.longitude.is_none());
        assert!(data.city.is_none());
        assert!(data.country_code.is_none());
        assert!(!data.is_eu);
    }

    #[test]
    fn disabled_datasets_yield_empty_data() {
        let db = GeoDb::open(None, None).unwrap();
        let data = db.lookup(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)));
        assert_eq!(data, GeoData::default());
        assert!(!data.is_eu);
        assert!(data.isp.is_none());
    }

    #[test]
    fn missing_database_file_is_an_error() {
        let result = GeoDb::open(Some("/nonexistent/GeoLite2-City.mmdb"), None);
        assert!(matches!(result, Err(Error::GeoDbError(_))));
    }
}
