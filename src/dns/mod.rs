//! Authoritative record mutation.
//!
//! An accepted update ends with exactly one external mutation: the A record
//! for the domain is upserted in its zone with the caller's source address
//! and a fixed short TTL. The mutation is an idempotent create-or-replace, so
//! the daemon never retries it; callers can safely re-run the whole update.
//!
//! [`rfc2136::Rfc2136Mutator`] is the production implementation, speaking
//! [RFC-2136] dynamic update to the authoritative server. Tests substitute
//! their own [`RecordMutator`].
//!
//! [RFC-2136]: https://www.rfc-editor.org/rfc/rfc2136

use crate::error::Error;
use std::net::Ipv4Addr;
use std::sync::Arc;

pub mod rfc2136;

#[allow(clippy::module_name_repetitions)]
pub use rfc2136::Rfc2136Mutator;

/// TTL applied to every upserted A record, in seconds. Deliberately short:
/// dynamic IPs get reassigned often and stale answers must age out fast.
pub const RECORD_TTL: u32 = 60;

/// `DynRecordMutator` is a type alias for a [`RecordMutator`] shared between
/// request handlers through an [`Arc`].
#[allow(clippy::module_name_repetitions)]
pub type DynRecordMutator = Arc<dyn RecordMutator + Send + Sync>;

/// An async trait describing create-or-replace mutation of a domain's A
/// record in its authoritative zone.
#[async_trait::async_trait]
pub trait RecordMutator {
    /// Upsert the A record for `domain` in `zone` to `addr` with
    /// [`RECORD_TTL`]. Success means the mutation was accepted, not that it
    /// has propagated.
    async fn upsert_a(&self, domain: &str, addr: Ipv4Addr, zone: &str) -> Result<(), Error>;
}
