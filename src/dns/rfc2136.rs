//! An [RFC-2136] dynamic update implementation of the
//! [`RecordMutator`][super::RecordMutator] trait.
//!
//! Sends updates to a single authoritative server over UDP using a long-lived
//! client connected once at startup. An upsert is one update message carrying
//! two operations: delete the existing A rrset, then add the new record. The
//! server applies the whole message atomically ([RFC-2136] §3.4), so a
//! refused or lost update leaves the previous record in place rather than a
//! hole in the zone.
//!
//! [RFC-2136]: https://www.rfc-editor.org/rfc/rfc2136

use crate::dns::{RecordMutator, RECORD_TTL};
use crate::error::Error;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use tokio::net::UdpSocket;
use tokio::sync::Mutex;
use trust_dns_client::client::AsyncClient;
use trust_dns_proto::xfer::FirstAnswer;
use trust_dns_proto::DnsHandle;
use trust_dns_client::op::{Message, MessageType, OpCode, Query, ResponseCode};
use trust_dns_client::rr::{DNSClass, Name, RData, Record, RecordType};
use trust_dns_client::udp::UdpClientStream;

pub struct Rfc2136Mutator {
    // ClientHandle methods need &mut; updates for different domains serialize
    // on this lock, which is fine at dynamic-DNS call rates.
    client: Mutex<AsyncClient>,
}

impl Rfc2136Mutator {
    /// Connect a dynamic update client to the authoritative server at `server`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DNSError`] if the client handshake fails.
    pub async fn connect(server: SocketAddr) -> Result<Self, Error> {
        let stream = UdpClientStream::<UdpSocket>::new(server);
        let (client, bg) = AsyncClient::connect(stream).await?;
        tokio::spawn(bg);
        Ok(Self {
            client: Mutex::new(client),
        })
    }
}

/// Build the single UPDATE message for an A record upsert.
///
/// The update section holds two records processed in order: an ANY-class,
/// zero-TTL, empty-rdata entry that clears the existing A rrset
/// ([RFC-2136] §2.5.2), then the IN-class replacement. Keeping both in one
/// message is what makes the upsert atomic on the server side.
///
/// [RFC-2136]: https://www.rfc-editor.org/rfc/rfc2136
fn upsert_message(domain: &str, addr: Ipv4Addr, zone: &str) -> Result<Message, Error> {
    let name = Name::from_str(domain)?;
    let origin = Name::from_str(zone)?;

    // The zone section rides in the query section of the wire format.
    let mut zone = Query::new();
    zone.set_name(origin)
        .set_query_class(DNSClass::IN)
        .set_query_type(RecordType::SOA);

    let mut message = Message::new();
    message
        .set_id(rand::random())
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Update)
        .set_recursion_desired(false);
    message.add_query(zone);

    // The update section rides in the name-server section.
    let mut clear = Record::with(name.clone(), RecordType::A, 0);
    clear.set_dns_class(DNSClass::ANY);
    clear.set_data(None);
    message.add_name_server(clear);
    message.add_name_server(Record::from_rdata(name, RECORD_TTL, RData::A(addr)));

    Ok(message)
}

#[async_trait::async_trait]
impl RecordMutator for Rfc2136Mutator {
    async fn upsert_a(&self, domain: &str, addr: Ipv4Addr, zone: &str) -> Result<(), Error> {
        let message = upsert_message(domain, addr, zone)?;
        let mut client = self.client.lock().await;
        let response = client.send(message).first_answer().await?;
        if response.response_code() != ResponseCode::NoError {
            return Err(Error::UpdateRefused(response.response_code()));
        }
        Ok(())
    }
}
