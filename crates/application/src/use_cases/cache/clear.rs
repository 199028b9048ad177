use crate::ports::{AddressCache, AuthorityCache};
use std::sync::Arc;
use tracing::info;

pub struct ClearCacheUseCase {
    address_cache: Arc<dyn AddressCache>,
    authority_cache: Arc<dyn AuthorityCache>,
}

impl ClearCacheUseCase {
    pub fn new(address_cache: Arc<dyn AddressCache>, authority_cache: Arc<dyn AuthorityCache>) -> Self {
        Self {
            address_cache,
            authority_cache,
        }
    }

    /// Drop every entry of both tables. Returns how many were removed.
    pub fn execute(&self) -> usize {
        let removed = self.address_cache.stats().entries + self.authority_cache.stats().entries;
        self.address_cache.clear();
        self.authority_cache.clear();
        info!(removed, "Caches cleared");
        removed
    }
}
