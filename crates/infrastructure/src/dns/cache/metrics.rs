use rootwalk_application::ports::CacheTableStats;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters of one cache table. Relaxed ordering: the numbers are reported,
/// never used for synchronization.
#[derive(Debug, Default)]
pub struct CacheMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub insertions: AtomicU64,
    pub lazy_evictions: AtomicU64,
}

impl CacheMetrics {
    pub fn snapshot(&self, entries: usize) -> CacheTableStats {
        CacheTableStats {
            entries,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            insertions: self.insertions.load(Ordering::Relaxed),
            lazy_evictions: self.lazy_evictions.load(Ordering::Relaxed),
        }
    }
}
