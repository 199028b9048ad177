use async_trait::async_trait;
use rootwalk_application::ports::{QueryResponse, QueryTransport, RootBootstrap};
use rootwalk_domain::{DomainError, RecordType, ResourceRecord};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

type QueryKey = (Ipv4Addr, String, RecordType);

/// Transport answering from a script keyed by (server, name, type).
///
/// Unscripted queries fail like an unreachable server would.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<QueryKey, QueryResponse>>,
    failing: Mutex<Vec<Ipv4Addr>>,
    calls: Mutex<Vec<QueryKey>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(
        self,
        server: Ipv4Addr,
        name: &str,
        record_type: RecordType,
        response: QueryResponse,
    ) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert((server, name.to_string(), record_type), response);
        self
    }

    /// Referral to `zone` served by `nameserver`, with glue when `glue` is set.
    pub fn referral(
        self,
        server: Ipv4Addr,
        name: &str,
        zone: &str,
        ns_ttl: u32,
        nameserver: &str,
        glue: Option<(Ipv4Addr, u32)>,
    ) -> Self {
        let additional = glue
            .map(|(ip, ttl)| vec![ResourceRecord::a(nameserver, ttl, ip)])
            .unwrap_or_default();
        self.reply(
            server,
            name,
            RecordType::NS,
            QueryResponse {
                answers: vec![],
                authority: vec![ResourceRecord::ns(zone, ns_ttl, nameserver)],
                additional,
            },
        )
    }

    /// NS query answered with a lone SOA: `server` is authoritative.
    pub fn soa(self, server: Ipv4Addr, name: &str, zone: &str) -> Self {
        self.reply(
            server,
            name,
            RecordType::NS,
            QueryResponse {
                answers: vec![],
                authority: vec![ResourceRecord::soa(zone, 900, "ns.invalid.", 3600)],
                additional: vec![],
            },
        )
    }

    pub fn answer(self, server: Ipv4Addr, name: &str, answers: Vec<ResourceRecord>) -> Self {
        self.reply(
            server,
            name,
            RecordType::A,
            QueryResponse {
                answers,
                authority: vec![],
                additional: vec![],
            },
        )
    }

    pub fn empty_answer(self, server: Ipv4Addr, name: &str, zone: &str) -> Self {
        self.reply(
            server,
            name,
            RecordType::A,
            QueryResponse {
                answers: vec![],
                authority: vec![ResourceRecord::soa(zone, 900, "ns.invalid.", 3600)],
                additional: vec![],
            },
        )
    }

    pub fn fail(self, server: Ipv4Addr) -> Self {
        self.failing.lock().unwrap().push(server);
        self
    }

    pub fn calls(&self) -> Vec<QueryKey> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl QueryTransport for MockTransport {
    async fn send_query(
        &self,
        name: &str,
        record_type: RecordType,
        server: Ipv4Addr,
    ) -> Result<QueryResponse, DomainError> {
        let key = (server, name.to_string(), record_type);
        self.calls.lock().unwrap().push(key.clone());

        if self.failing.lock().unwrap().contains(&server) {
            return Err(DomainError::TransportConnectionRefused { server });
        }

        self.replies
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| {
                DomainError::IoError(format!(
                    "no scripted reply for {} {} at {}",
                    name, record_type, server
                ))
            })
    }
}

// ============================================================================
// Root bootstrap
// ============================================================================

pub struct StaticRootBootstrap {
    address: Ipv4Addr,
    lookups: AtomicUsize,
    fail: bool,
}

impl StaticRootBootstrap {
    pub fn new(address: Ipv4Addr) -> Self {
        Self {
            address,
            lookups: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            address: Ipv4Addr::UNSPECIFIED,
            lookups: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RootBootstrap for StaticRootBootstrap {
    async fn root_address(&self, root_server: &str) -> Result<Ipv4Addr, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::BootstrapFailed(format!(
                "{} did not resolve",
                root_server
            )));
        }
        Ok(self.address)
    }
}
