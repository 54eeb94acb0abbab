//! Dyn DNS Daemon
//!
//! A small self-hosted dynamic DNS service for clients stuck behind an ISP
//! that reassigns their public IP at will.
//!
//! Clients keep a DNS A record pointed at themselves with two HTTP calls:
//! first [`/get`][crate::api#get-get] to learn their apparent public address
//! (plus best-effort GeoIP/ISP enrichment), then
//! [`/update`][crate::api#update-get] with a per-domain proof derived from a
//! shared secret. The secret itself never crosses the wire; see [`auth`] for
//! the proof scheme. Accepted updates are pushed to the authoritative server
//! as an [RFC-2136] dynamic update.
//!
//! [RFC-2136]: https://www.rfc-editor.org/rfc/rfc2136
//!
#![warn(clippy::pedantic)]

pub mod api;
pub mod auth;
pub mod config;
pub mod dns;
pub mod domains;
pub mod error;
pub mod geo;

use crate::domains::{file, memory};
pub use api::new as new_http;
pub use config::{Config, SharedConfig};
pub use file::FileDomainStore;
pub use memory::InMemoryDomainStore;
