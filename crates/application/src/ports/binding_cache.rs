use rootwalk_domain::NameBinding;
use std::sync::Arc;

/// Point-in-time counters of one cache table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheTableStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub lazy_evictions: u64,
}

impl CacheTableStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Hostname -> resolved address.
///
/// Entries are evicted lazily: an expired entry found by `lookup` is removed
/// and reported as a miss. Nothing expires in the background.
pub trait AddressCache: Send + Sync {
    fn lookup(&self, name: &str) -> Option<NameBinding>;

    /// Unconditional overwrite.
    fn store(&self, name: &str, binding: NameBinding);

    fn stats(&self) -> CacheTableStats;

    fn clear(&self);
}

/// Delegation point (NS owner name) -> authoritative server binding.
pub trait AuthorityCache: Send + Sync {
    /// Most specific live entry among the suffixes of `name`, with the suffix
    /// that matched. Expired entries met on the way are removed and the scan
    /// continues with shorter suffixes.
    fn lookup(&self, name: &str) -> Option<(NameBinding, Arc<str>)>;

    /// Unconditional overwrite. The root is never stored.
    fn store(&self, suffix: &str, binding: NameBinding);

    fn stats(&self) -> CacheTableStats;

    fn clear(&self);
}
