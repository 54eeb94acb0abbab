//! Error types.

use trust_dns_client::error::ClientError;
use trust_dns_client::op::ResponseCode;
use trust_dns_proto::error::ProtoError;

/// Error enumerates the possible Dyn DNS Daemon error states.
///
/// The `Display` renderings of the first four variants are part of the HTTP
/// API contract: they are returned verbatim as the `error` field of the
/// [`/update` endpoint][crate::api#update-get]'s JSON error responses.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when clients `GET` the [`/update` API endpoint][crate::api#update-get]
    /// without both the `domain` and `hash` query parameters.
    #[error("Missing domain or hash")]
    MissingParams,

    /// Returned when the `domain` given to the
    /// [`/update` API endpoint][crate::api#update-get] has no entry in the
    /// domain registry, or when the registry lookup itself fails. The two
    /// cases are deliberately indistinguishable to callers so the endpoint
    /// can't be used to enumerate registered domains.
    #[error("invalid domain")]
    InvalidDomain,

    /// Returned when the `hash` given to the
    /// [`/update` API endpoint][crate::api#update-get] doesn't match the
    /// proof expected for the caller's source IP. See
    /// [`auth::verify`][crate::auth::verify].
    #[error("Invalid hash")]
    InvalidProof,

    /// Returned when the authoritative server doesn't accept the record
    /// mutation for an otherwise valid update.
    #[error("Failed to update DNS")]
    UpdateFailed,

    /// Returned when the authoritative server answers a dynamic update with a
    /// response code other than `NoError`.
    #[error("DNS update refused: {0}")]
    UpdateRefused(ResponseCode),

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when processing JSON from disk (e.g.
    /// [trying to load a `Config`][crate::config::Config::try_from_file], or
    /// [trying to load a `FileDomainStore`][crate::domains::file::FileDomainStore::try_from_file])
    /// fails due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),

    /// Returned when the dynamic update client encounters a generic DNS
    /// protocol error.
    #[error("DNS error")]
    DNSError(#[from] ProtoError),

    /// Returned when the dynamic update client fails to exchange messages
    /// with the authoritative server.
    #[error("DNS client error")]
    DNSClientError(#[from] ClientError),

    /// Returned when a configured GeoIP database can't be opened.
    #[error("GeoIP database error")]
    GeoDbError(#[from] maxminddb::MaxMindDBError),

    /// Returned when the system resolver configuration can't be loaded for
    /// reverse hostname lookups.
    #[error("resolver error")]
    ResolverError(#[from] trust_dns_resolver::error::ResolveError),
}
