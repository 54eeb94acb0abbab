//! Shared-secret update authentication.
//!
//! An update request proves the right to mutate a domain's A record without
//! ever transmitting the domain's secret. The proof is a capability token
//! bound to the caller's current apparent IP:
//!
//! ```text
//! proof = lowercase_hex(SHA-256(secret || zone || source_ip))
//! ```
//!
//! where `zone` is the zone identifier from the domain's
//! [`DomainConfig`][crate::domains::DomainConfig] and `source_ip` is always
//! the transport-observed address of the caller, never a client-supplied
//! value. Anyone holding `secret` can compute the exact proof the server
//! expects for their current IP; the server recomputes it per call, so a
//! captured proof is only replayable while the legitimate client keeps the
//! same IP.

use sha2::{Digest, Sha256};
use std::net::IpAddr;
use subtle::ConstantTimeEq;

/// Compute the expected update proof for a `(secret, zone, ip)` triple.
///
/// The digest input is the straight UTF-8 concatenation of the three values,
/// the IP rendered in its canonical `Display` form. The result is 64
/// lowercase hex characters.
#[must_use]
pub fn compute_proof(secret: &str, zone: &str, ip: IpAddr) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(zone.as_bytes());
    hasher.update(ip.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a caller-supplied proof against the expected proof for the triple.
///
/// The comparison is constant-time over the hex renderings. The match is
/// exact: an uppercase rendering of the right digest is rejected.
#[must_use]
pub fn verify(candidate: &str, secret: &str, zone: &str, ip: IpAddr) -> bool {
    let expected = compute_proof(secret, zone, ip);
    expected.as_bytes().ct_eq(candidate.as_bytes()).into()
}
