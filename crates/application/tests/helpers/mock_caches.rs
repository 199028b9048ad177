use rootwalk_application::ports::{AddressCache, AuthorityCache, CacheTableStats, Clock};
use rootwalk_domain::{suffix_chain, NameBinding};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Manual clock
// ============================================================================

pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self {
            now: AtomicU64::new(start),
        }
    }

    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

// ============================================================================
// In-memory cache tables
// ============================================================================

pub struct MemoryAddressCache {
    entries: Mutex<HashMap<String, NameBinding>>,
    clock: Arc<ManualClock>,
}

impl MemoryAddressCache {
    pub fn new(clock: Arc<ManualClock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Raw entry, ignoring expiry.
    pub fn peek(&self, name: &str) -> Option<NameBinding> {
        self.entries.lock().unwrap().get(name).cloned()
    }
}

impl AddressCache for MemoryAddressCache {
    fn lookup(&self, name: &str) -> Option<NameBinding> {
        let mut entries = self.entries.lock().unwrap();
        let binding = entries.get(name)?.clone();
        if binding.is_expired(self.clock.now_secs()) {
            entries.remove(name);
            return None;
        }
        Some(binding)
    }

    fn store(&self, name: &str, binding: NameBinding) {
        self.entries
            .lock()
            .unwrap()
            .insert(name.to_string(), binding);
    }

    fn stats(&self) -> CacheTableStats {
        CacheTableStats {
            entries: self.entries.lock().unwrap().len(),
            ..Default::default()
        }
    }

    fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

pub struct MemoryAuthorityCache {
    entries: Mutex<HashMap<String, NameBinding>>,
    clock: Arc<ManualClock>,
}

impl MemoryAuthorityCache {
    pub fn new(clock: Arc<ManualClock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    pub fn peek(&self, suffix: &str) -> Option<NameBinding> {
        self.entries.lock().unwrap().get(suffix).cloned()
    }
}

impl AuthorityCache for MemoryAuthorityCache {
    fn lookup(&self, name: &str) -> Option<(NameBinding, Arc<str>)> {
        let mut entries = self.entries.lock().unwrap();
        let now = self.clock.now_secs();
        for suffix in suffix_chain(name) {
            let Some(binding) = entries.get(suffix).cloned() else {
                continue;
            };
            if binding.is_expired(now) {
                entries.remove(suffix);
                continue;
            }
            return Some((binding, Arc::from(suffix)));
        }
        None
    }

    fn store(&self, suffix: &str, binding: NameBinding) {
        if suffix == "." {
            return;
        }
        self.entries
            .lock()
            .unwrap()
            .insert(suffix.to_string(), binding);
    }

    fn stats(&self) -> CacheTableStats {
        CacheTableStats {
            entries: self.entries.lock().unwrap().len(),
            ..Default::default()
        }
    }

    fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
