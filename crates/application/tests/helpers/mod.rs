#![allow(dead_code)]

pub mod mock_caches;
pub mod mock_transport;

pub use mock_caches::{ManualClock, MemoryAddressCache, MemoryAuthorityCache};
pub use mock_transport::{MockTransport, StaticRootBootstrap};

use rootwalk_application::services::{IterativeResolver, ResolverLimits};
use std::net::Ipv4Addr;
use std::sync::Arc;

pub const ROOT_NAME: &str = "a.root-servers.net.";
pub const ROOT_IP: Ipv4Addr = Ipv4Addr::new(198, 41, 0, 4);
pub const START_TIME: u64 = 1_700_000_000;

/// Resolver wired to in-memory collaborators, with handles kept for asserts.
pub struct Harness {
    pub resolver: Arc<IterativeResolver>,
    pub transport: Arc<MockTransport>,
    pub bootstrap: Arc<StaticRootBootstrap>,
    pub address_cache: Arc<MemoryAddressCache>,
    pub authority_cache: Arc<MemoryAuthorityCache>,
    pub clock: Arc<ManualClock>,
}

impl Harness {
    pub fn new(transport: MockTransport) -> Self {
        Self::with_limits(transport, ResolverLimits::default())
    }

    pub fn with_limits(transport: MockTransport, limits: ResolverLimits) -> Self {
        let clock = Arc::new(ManualClock::new(START_TIME));
        let transport = Arc::new(transport);
        let bootstrap = Arc::new(StaticRootBootstrap::new(ROOT_IP));
        let address_cache = Arc::new(MemoryAddressCache::new(clock.clone()));
        let authority_cache = Arc::new(MemoryAuthorityCache::new(clock.clone()));

        let resolver = IterativeResolver::new(
            transport.clone(),
            bootstrap.clone(),
            address_cache.clone(),
            authority_cache.clone(),
            clock.clone(),
            ROOT_NAME,
        )
        .with_limits(limits);

        Self {
            resolver: Arc::new(resolver),
            transport,
            bootstrap,
            address_cache,
            authority_cache,
            clock,
        }
    }
}
