use super::BindingTable;
use rootwalk_application::ports::{AuthorityCache, CacheTableStats, Clock};
use rootwalk_domain::{suffix_chain, NameBinding};
use std::sync::Arc;
use tracing::debug;

/// Delegation point -> authoritative server table, searched from the most
/// specific suffix of a name down to its top-level label.
pub struct InMemoryAuthorityCache {
    table: BindingTable,
    clock: Arc<dyn Clock>,
}

impl InMemoryAuthorityCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: BindingTable::new("authority"),
            clock,
        }
    }
}

impl AuthorityCache for InMemoryAuthorityCache {
    fn lookup(&self, name: &str) -> Option<(NameBinding, Arc<str>)> {
        let now = self.clock.now_secs();
        for suffix in suffix_chain(name) {
            if let Some(binding) = self.table.get_live(suffix, now) {
                self.table.record_hit();
                return Some((binding, Arc::from(suffix)));
            }
        }
        self.table.record_miss();
        debug!(name = %name, "Authority cache MISS");
        None
    }

    fn store(&self, suffix: &str, binding: NameBinding) {
        if suffix == "." {
            return;
        }
        self.table.insert(suffix, binding);
    }

    fn stats(&self) -> CacheTableStats {
        self.table.metrics().snapshot(self.table.len())
    }

    fn clear(&self) {
        self.table.clear();
    }
}
