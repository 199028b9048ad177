use super::CacheMetrics;
use dashmap::DashMap;
use rootwalk_domain::NameBinding;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::debug;

/// Name -> binding map with lazy expiry, shared by both cache tables.
///
/// Hit and miss counting is left to the callers: one authority lookup may
/// probe several keys.
pub struct BindingTable {
    label: &'static str,
    entries: DashMap<Arc<str>, NameBinding, FxBuildHasher>,
    metrics: CacheMetrics,
}

impl BindingTable {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            entries: DashMap::with_hasher(FxBuildHasher::default()),
            metrics: CacheMetrics::default(),
        }
    }

    /// Live binding under `key` at `now`. An expired one is removed.
    pub fn get_live(&self, key: &str, now: u64) -> Option<NameBinding> {
        let binding = self.entries.get(key).map(|entry| entry.value().clone())?;
        if !binding.is_expired(now) {
            return Some(binding);
        }

        // Another task may have stored a fresh binding since the read.
        if self
            .entries
            .remove_if(key, |_, current| current.is_expired(now))
            .is_some()
        {
            self.metrics.lazy_evictions.fetch_add(1, Ordering::Relaxed);
            debug!(cache = self.label, key = %key, "Expired entry evicted");
        }
        None
    }

    /// Stores `binding` unless it lacks an address, ttl or timestamp.
    pub fn insert(&self, key: &str, binding: NameBinding) {
        if !binding.is_cacheable() {
            debug!(cache = self.label, key = %key, "Skipping binding without address or ttl");
            return;
        }
        self.entries.insert(Arc::from(key), binding);
        self.metrics.insertions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_hit(&self) {
        self.metrics.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.metrics.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }
}
