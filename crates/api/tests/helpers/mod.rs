#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use rootwalk_api::{create_api_routes, AppState};
use rootwalk_application::ports::{QueryResponse, QueryTransport};
use rootwalk_application::services::IterativeResolver;
use rootwalk_application::use_cases::{
    ClearCacheUseCase, GetCacheStatsUseCase, ResolveHostnameUseCase,
};
use rootwalk_domain::{DomainError, RecordType, ResourceRecord};
use rootwalk_infrastructure::dns::{InMemoryAddressCache, InMemoryAuthorityCache};
use rootwalk_infrastructure::system::{SystemClock, SystemRootBootstrap};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const ROOT_IP: Ipv4Addr = Ipv4Addr::new(198, 41, 0, 4);
pub const NS_IP: Ipv4Addr = Ipv4Addr::new(213, 180, 193, 1);
pub const ADS_IP: Ipv4Addr = Ipv4Addr::new(77, 88, 21, 179);

/// Two-level hierarchy: the root delegates `adfox.ru.` straight to
/// ns1.adfox.ru., which knows `ads.adfox.ru.`.
pub struct ScriptedTransport {
    replies: HashMap<(Ipv4Addr, String, RecordType), QueryResponse>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub fn adfox() -> Self {
        let mut replies = HashMap::new();
        replies.insert(
            (ROOT_IP, "ads.adfox.ru.".to_string(), RecordType::NS),
            QueryResponse {
                answers: vec![],
                authority: vec![ResourceRecord::ns("adfox.ru.", 3600, "ns1.adfox.ru.")],
                additional: vec![ResourceRecord::a("ns1.adfox.ru.", 3600, NS_IP)],
            },
        );
        replies.insert(
            (NS_IP, "ads.adfox.ru.".to_string(), RecordType::NS),
            QueryResponse {
                answers: vec![],
                authority: vec![ResourceRecord::soa("adfox.ru.", 900, "ns1.adfox.ru.", 300)],
                additional: vec![],
            },
        );
        replies.insert(
            (NS_IP, "ads.adfox.ru.".to_string(), RecordType::A),
            QueryResponse {
                answers: vec![ResourceRecord::a("ads.adfox.ru.", 300, ADS_IP)],
                authority: vec![],
                additional: vec![],
            },
        );
        Self {
            replies,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl QueryTransport for ScriptedTransport {
    async fn send_query(
        &self,
        name: &str,
        record_type: RecordType,
        server: Ipv4Addr,
    ) -> Result<QueryResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies
            .get(&(server, name.to_string(), record_type))
            .cloned()
            .ok_or(DomainError::TransportConnectionRefused { server })
    }
}

pub fn create_test_app() -> Router {
    let clock = Arc::new(SystemClock);
    let address_cache = Arc::new(InMemoryAddressCache::new(clock.clone()));
    let authority_cache = Arc::new(InMemoryAuthorityCache::new(clock.clone()));

    let resolver = Arc::new(IterativeResolver::new(
        Arc::new(ScriptedTransport::adfox()),
        Arc::new(SystemRootBootstrap::new(Some(ROOT_IP))),
        address_cache.clone(),
        authority_cache.clone(),
        clock,
        "a.root-servers.net.",
    ));

    let state = AppState {
        resolve_hostname: Arc::new(ResolveHostnameUseCase::new(resolver)),
        get_cache_stats: Arc::new(GetCacheStatsUseCase::new(
            address_cache.clone(),
            authority_cache.clone(),
        )),
        clear_cache: Arc::new(ClearCacheUseCase::new(address_cache, authority_cache)),
    };

    create_api_routes(state)
}
