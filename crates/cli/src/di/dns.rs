use rootwalk_application::ports::{AddressCache, AuthorityCache, Clock};
use rootwalk_application::services::{IterativeResolver, ResolverLimits};
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::{DnsQueryTransport, InMemoryAddressCache, InMemoryAuthorityCache};
use rootwalk_infrastructure::system::{SystemClock, SystemRootBootstrap};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub address_cache: Arc<dyn AddressCache>,
    pub authority_cache: Arc<dyn AuthorityCache>,
    pub resolver: Arc<IterativeResolver>,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let address_cache: Arc<dyn AddressCache> =
            Arc::new(InMemoryAddressCache::new(clock.clone()));
        let authority_cache: Arc<dyn AuthorityCache> =
            Arc::new(InMemoryAuthorityCache::new(clock.clone()));

        let transport = Arc::new(DnsQueryTransport::from_config(&config.resolver));
        let bootstrap = Arc::new(SystemRootBootstrap::new(config.root_server_address()));

        let limits = ResolverLimits {
            max_referrals: config.resolver.max_referrals,
            max_nested_depth: config.resolver.max_nested_depth,
        };

        let resolver = IterativeResolver::new(
            transport,
            bootstrap,
            address_cache.clone(),
            authority_cache.clone(),
            clock,
            &config.resolver.root_server,
        )
        .with_limits(limits);

        info!(
            protocol = %config.resolver.protocol,
            port = config.resolver.port,
            timeout_ms = config.resolver.query_timeout_ms,
            max_referrals = limits.max_referrals,
            max_nested_depth = limits.max_nested_depth,
            "Resolver initialized"
        );

        Self {
            address_cache,
            authority_cache,
            resolver: Arc::new(resolver),
        }
    }
}
