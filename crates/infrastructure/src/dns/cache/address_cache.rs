use super::BindingTable;
use rootwalk_application::ports::{AddressCache, CacheTableStats, Clock};
use rootwalk_domain::NameBinding;
use std::sync::Arc;
use tracing::debug;

/// Hostname -> address table.
pub struct InMemoryAddressCache {
    table: BindingTable,
    clock: Arc<dyn Clock>,
}

impl InMemoryAddressCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: BindingTable::new("address"),
            clock,
        }
    }
}

impl AddressCache for InMemoryAddressCache {
    fn lookup(&self, name: &str) -> Option<NameBinding> {
        match self.table.get_live(name, self.clock.now_secs()) {
            Some(binding) => {
                self.table.record_hit();
                Some(binding)
            }
            None => {
                self.table.record_miss();
                debug!(name = %name, "Address cache MISS");
                None
            }
        }
    }

    fn store(&self, name: &str, binding: NameBinding) {
        self.table.insert(name, binding);
    }

    fn stats(&self) -> CacheTableStats {
        self.table.metrics().snapshot(self.table.len())
    }

    fn clear(&self) {
        self.table.clear();
    }
}
