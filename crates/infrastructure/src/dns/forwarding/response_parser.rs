use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use rootwalk_application::ports::QueryResponse;
use rootwalk_domain::{to_fqdn_lossy, DomainError, RecordData, ResourceRecord};
use std::sync::Arc;
use tracing::debug;

const HEADER_LEN: usize = 12;
/// QR bit in the high byte of the flags word
const FLAG_RESPONSE: u8 = 0x80;

/// A decoded reply with the header bits the transport layer acts on.
#[derive(Debug, Clone)]
pub struct ParsedReply {
    pub id: u16,
    pub rcode: ResponseCode,
    pub truncated: bool,
    pub response: QueryResponse,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decode a reply and check it answers query `expected_id`.
    pub fn parse_reply(response_bytes: &[u8], expected_id: u16) -> Result<ParsedReply, DomainError> {
        let reply = Self::parse(response_bytes)?;
        if reply.id != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "reply id {} does not match query id {}",
                reply.id, expected_id
            )));
        }
        Ok(reply)
    }

    pub fn parse(response_bytes: &[u8]) -> Result<ParsedReply, DomainError> {
        if response_bytes.len() < HEADER_LEN {
            return Err(DomainError::InvalidDnsResponse(format!(
                "reply of {} bytes is shorter than a DNS header",
                response_bytes.len()
            )));
        }
        let id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);
        if response_bytes[2] & FLAG_RESPONSE == 0 {
            return Err(DomainError::InvalidDnsResponse(
                "message is a query, not a response".to_string(),
            ));
        }

        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let response = QueryResponse {
            answers: Self::convert_section(message.answers()),
            authority: Self::convert_section(message.name_servers()),
            additional: Self::convert_section(message.additionals()),
        };

        debug!(
            id = id,
            rcode = ?message.response_code(),
            answers = response.answers.len(),
            authority = response.authority.len(),
            additional = response.additional.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(ParsedReply {
            id,
            rcode: message.response_code(),
            truncated: message.truncated(),
            response,
        })
    }

    fn convert_section(records: &[Record]) -> Vec<ResourceRecord> {
        records.iter().map(Self::convert_record).collect()
    }

    fn convert_record(record: &Record) -> ResourceRecord {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::NS(ns) => RecordData::NS(Arc::from(to_fqdn_lossy(&ns.0.to_utf8()))),
            RData::CNAME(canonical) => {
                RecordData::CNAME(Arc::from(to_fqdn_lossy(&canonical.0.to_utf8())))
            }
            RData::SOA(soa) => RecordData::SOA {
                mname: Arc::from(to_fqdn_lossy(&soa.mname().to_utf8())),
                minimum: soa.minimum(),
            },
            _ => RecordData::Other(u16::from(record.record_type())),
        };

        ResourceRecord::new(to_fqdn_lossy(&record.name().to_utf8()), record.ttl(), data)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
