use crate::ports::{AddressCache, AuthorityCache, CacheTableStats};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub address: CacheTableStats,
    pub authority: CacheTableStats,
}

pub struct GetCacheStatsUseCase {
    address_cache: Arc<dyn AddressCache>,
    authority_cache: Arc<dyn AuthorityCache>,
}

impl GetCacheStatsUseCase {
    pub fn new(address_cache: Arc<dyn AddressCache>, authority_cache: Arc<dyn AuthorityCache>) -> Self {
        Self {
            address_cache,
            authority_cache,
        }
    }

    pub fn execute(&self) -> CacheStats {
        CacheStats {
            address: self.address_cache.stats(),
            authority: self.authority_cache.stats(),
        }
    }
}
