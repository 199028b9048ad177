use super::RecordType;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Decoded RDATA of a resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    NS(Arc<str>),
    CNAME(Arc<str>),
    SOA { mname: Arc<str>, minimum: u32 },
    /// Any type the resolver does not interpret (AAAA, RRSIG, OPT...)
    Other(u16),
}

/// One record from an answer, authority or additional section.
///
/// Owner names and name targets are lowercase FQDNs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub owner: Arc<str>,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(owner: impl Into<Arc<str>>, ttl: u32, data: RecordData) -> Self {
        Self {
            owner: owner.into(),
            ttl,
            data,
        }
    }

    pub fn a(owner: &str, ttl: u32, ip: Ipv4Addr) -> Self {
        Self::new(owner, ttl, RecordData::A(ip))
    }

    pub fn ns(owner: &str, ttl: u32, nameserver: &str) -> Self {
        Self::new(owner, ttl, RecordData::NS(Arc::from(nameserver)))
    }

    pub fn cname(owner: &str, ttl: u32, target: &str) -> Self {
        Self::new(owner, ttl, RecordData::CNAME(Arc::from(target)))
    }

    pub fn soa(owner: &str, ttl: u32, mname: &str, minimum: u32) -> Self {
        Self::new(
            owner,
            ttl,
            RecordData::SOA {
                mname: Arc::from(mname),
                minimum,
            },
        )
    }

    /// `None` for types outside [`RecordType`].
    pub fn record_type(&self) -> Option<RecordType> {
        match self.data {
            RecordData::A(_) => Some(RecordType::A),
            RecordData::NS(_) => Some(RecordType::NS),
            RecordData::CNAME(_) => Some(RecordType::CNAME),
            RecordData::SOA { .. } => Some(RecordType::SOA),
            RecordData::Other(_) => None,
        }
    }

    pub fn is_soa(&self) -> bool {
        matches!(self.data, RecordData::SOA { .. })
    }
}
