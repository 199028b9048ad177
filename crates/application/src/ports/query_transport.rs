use async_trait::async_trait;
use rootwalk_domain::{DomainError, RecordData, RecordType, ResourceRecord};
use std::net::Ipv4Addr;

/// Sections of a nameserver reply, decoded into domain records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResponse {
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl QueryResponse {
    /// Answer present and no referral: the queried server is authoritative.
    pub fn is_final_answer(&self) -> bool {
        !self.answers.is_empty() && self.authority.is_empty()
    }

    /// A lone SOA in the authority section: the server owns the zone even
    /// though the name may not exist.
    pub fn is_soa_only(&self) -> bool {
        self.authority.len() == 1 && self.authority[0].is_soa()
    }

    /// A glue record for `nameserver` in the additional section.
    pub fn glue_for(&self, nameserver: &str) -> Option<(Ipv4Addr, u32)> {
        self.additional.iter().find_map(|record| match record.data {
            RecordData::A(ip) if record.owner.eq_ignore_ascii_case(nameserver) => {
                Some((ip, record.ttl))
            }
            _ => None,
        })
    }
}

/// Sends one non-recursive query to a nameserver.
///
/// Implementations own framing, timeouts and id matching; any I/O failure or
/// malformed reply surfaces as an error and fails the resolution.
#[async_trait]
pub trait QueryTransport: Send + Sync {
    async fn send_query(
        &self,
        name: &str,
        record_type: RecordType,
        server: Ipv4Addr,
    ) -> Result<QueryResponse, DomainError>;
}
