//! HTTP API for discovering your public IP and updating dynamic A records.
//!
//! # API Endpoints
//!
//! ## `/get` (GET)
//!
//!   Reports the caller's apparent public address as observed by the server,
//!   enriched with best-effort GeoIP, ISP, and reverse hostname data. Always
//!   returns HTTP 200 (OK) with a JSON body of the form:
//!
//!   ```json
//!   {
//!     "user_agent": "curl/8.0.1",
//!     "ip": "203.0.113.7",
//!     "hostname": "cust-203-0-113-7.example.net",
//!     "latitude": 52.37,
//!     "longitude": 4.88,
//!     "city": "Amsterdam",
//!     "region": "North Holland",
//!     "country": "Netherlands",
//!     "country_code": "NL",
//!     "continent": "Europe",
//!     "is_eu": true,
//!     "local_timezone": "Europe/Amsterdam",
//!     "isp": "Example Carrier B.V."
//!   }
//!   ```
//!
//!   Every field except `ip` degrades to the literal string `"N/A"` (or
//!   `false` for `is_eu`) when the underlying lookup has no answer. Partial
//!   data is never an error; this endpoint has no failure responses.
//!
//! ## `/update` (GET)
//!
//!   Expects `domain` and `hash` query parameters:
//!
//!   ```text
//!   /update?domain=home.example.com&hash=9f86d0…
//!   ```
//!
//!   `domain` must be registered in the [domain store][crate::domains] and
//!   `hash` must be the [update proof][crate::auth] computed from the
//!   domain's secret, its zone identifier, and the caller's source IP as the
//!   server observes it. A matching proof upserts the domain's A record to
//!   that source IP with a 60 second TTL and returns HTTP 200 (OK):
//!
//!   ```json
//!   { "message": "DNS updated" }
//!   ```
//!
//!   Failure responses carry a JSON body of the form `{"error":"…"}`:
//!
//!   - 400 `Missing domain or hash` — either query parameter absent.
//!   - 400 `invalid domain` — unknown domain, or the registry lookup failed.
//!     The two are deliberately conflated so the endpoint can't be used to
//!     enumerate registered domains.
//!   - 403 `Invalid hash` — proof mismatch.
//!   - 500 `Failed to update DNS` — the authoritative server didn't accept
//!     the mutation. The mutation is an idempotent upsert, so retrying the
//!     whole request is always safe.

mod api_error;
mod model;
mod routes;
pub mod server;

pub use server::new;
