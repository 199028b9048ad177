use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Name recorded as the queried server when a step was served from cache.
pub const CACHE_MARKER: &str = "cache";

/// A name bound to an address (or to nothing, for negative answers) with
/// the TTL and the time it was obtained.
///
/// `ttl` and `acquired_at` are unix-second based: the binding is live while
/// `now <= acquired_at + ttl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameBinding {
    pub name: Arc<str>,
    pub address: Option<Ipv4Addr>,
    pub ttl: Option<u32>,
    pub acquired_at: Option<u64>,
}

impl NameBinding {
    /// A resolved address or nameserver binding.
    pub fn resolved(name: impl Into<Arc<str>>, address: Ipv4Addr, ttl: u32, acquired_at: u64) -> Self {
        Self {
            name: name.into(),
            address: Some(address),
            ttl: Some(ttl),
            acquired_at: Some(acquired_at),
        }
    }

    /// A server known only by address, such as the bootstrapped root.
    pub fn server(name: impl Into<Arc<str>>, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            address: Some(address),
            ttl: None,
            acquired_at: None,
        }
    }

    /// "No such address". Never cacheable.
    pub fn negative(name: impl Into<Arc<str>>, now: u64) -> Self {
        Self {
            name: name.into(),
            address: None,
            ttl: None,
            acquired_at: Some(now),
        }
    }

    pub fn cache_marker() -> Self {
        Self {
            name: Arc::from(CACHE_MARKER),
            address: None,
            ttl: None,
            acquired_at: None,
        }
    }

    pub fn is_cache_marker(&self) -> bool {
        self.address.is_none() && &*self.name == CACHE_MARKER
    }

    pub fn is_negative(&self) -> bool {
        self.address.is_none() && !self.is_cache_marker()
    }

    pub fn is_cacheable(&self) -> bool {
        self.address.is_some() && self.ttl.is_some() && self.acquired_at.is_some()
    }

    /// Last second at which the binding is still live.
    pub fn expires_at(&self) -> Option<u64> {
        match (self.ttl, self.acquired_at) {
            (Some(ttl), Some(at)) => Some(at.saturating_add(u64::from(ttl))),
            _ => None,
        }
    }

    /// Bindings without a TTL are always treated as expired.
    pub fn is_expired(&self, now: u64) -> bool {
        match self.expires_at() {
            Some(deadline) => now > deadline,
            None => true,
        }
    }

    pub fn remaining_ttl(&self, now: u64) -> Option<u32> {
        self.expires_at()
            .map(|deadline| deadline.saturating_sub(now).min(u64::from(u32::MAX)) as u32)
    }
}
