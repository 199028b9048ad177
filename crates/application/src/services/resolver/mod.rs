//! Iterative resolution from a root server down to the authoritative server.
//!
//! The work is split across three parts of one [`IterativeResolver`]:
//!
//! - **delegation**: follows NS referrals until a server is authoritative
//! - **address**: issues the final A query and collapses alias chains
//! - **trace**: records every round trip and cache short-circuit
//!
//! Glueless referrals and dangling aliases re-enter [`IterativeResolver::resolve`]
//! through a nested call without trace. Nested calls are awaited inline: they
//! may write to the caches the outer walk reads next.

mod address;
mod delegation;
mod trace;

pub use address::ChainLink;
pub use trace::TraceRecorder;

use crate::ports::{AddressCache, AuthorityCache, Clock, QueryTransport, RootBootstrap};
use futures::future::BoxFuture;
use rootwalk_domain::{normalize_fqdn, DomainError, NameBinding, RecordType, Trace};
use std::sync::Arc;
use tracing::{debug, info};

/// Bounds that stop pathological delegation graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverLimits {
    /// Referrals followed in one walk
    pub max_referrals: usize,
    /// Nesting of glueless / alias resolutions
    pub max_nested_depth: usize,
}

impl Default for ResolverLimits {
    fn default() -> Self {
        Self {
            max_referrals: 32,
            max_nested_depth: 8,
        }
    }
}

pub struct IterativeResolver {
    transport: Arc<dyn QueryTransport>,
    bootstrap: Arc<dyn RootBootstrap>,
    address_cache: Arc<dyn AddressCache>,
    authority_cache: Arc<dyn AuthorityCache>,
    clock: Arc<dyn Clock>,
    root_server: Arc<str>,
    limits: ResolverLimits,
}

impl IterativeResolver {
    pub fn new(
        transport: Arc<dyn QueryTransport>,
        bootstrap: Arc<dyn RootBootstrap>,
        address_cache: Arc<dyn AddressCache>,
        authority_cache: Arc<dyn AuthorityCache>,
        clock: Arc<dyn Clock>,
        root_server: &str,
    ) -> Self {
        Self {
            transport,
            bootstrap,
            address_cache,
            authority_cache,
            clock,
            root_server: Arc::from(root_server),
            limits: ResolverLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: ResolverLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Resolve `hostname` to an IPv4 address and return every step taken.
    ///
    /// With `need_trace = false` the address cache may answer directly and
    /// the authority cache may shorten the walk. With `need_trace = true`
    /// the walk always starts at the root; caches are still written.
    ///
    /// The last entry is the outcome: a resolved address, or a binding with
    /// no address when the name has none.
    pub async fn resolve(&self, hostname: &str, need_trace: bool) -> Result<Trace, DomainError> {
        let target = normalize_fqdn(hostname)?;
        self.resolve_at_depth(target, need_trace, 0).await
    }

    fn resolve_at_depth(
        &self,
        target: String,
        need_trace: bool,
        depth: usize,
    ) -> BoxFuture<'_, Result<Trace, DomainError>> {
        Box::pin(async move {
            if depth > self.limits.max_nested_depth {
                return Err(DomainError::NestingTooDeep {
                    name: target,
                    limit: self.limits.max_nested_depth,
                });
            }

            info!(target = %target, need_trace, depth, "resolve");
            let mut trace = TraceRecorder::new();

            if !need_trace {
                if let Some(cached) = self.address_cache.lookup(&target) {
                    debug!(target = %target, address = ?cached.address, "Address cache HIT");
                    trace.record_cache_hit(RecordType::A, cached);
                    return Ok(trace.finish());
                }
            }

            let authoritative = self
                .walk_delegations(&target, need_trace, depth, &mut trace)
                .await?;
            self.resolve_address(&target, authoritative, depth, &mut trace)
                .await?;

            Ok(trace.finish())
        })
    }

    /// Final binding for a name met mid-walk (an NS target without glue, or
    /// an alias target outside the answer).
    async fn resolve_nested(&self, name: &str, depth: usize) -> Result<NameBinding, DomainError> {
        let target = normalize_fqdn(name)?;
        let trace = self.resolve_at_depth(target, false, depth + 1).await?;
        trace
            .into_iter()
            .last()
            .map(|entry| entry.response)
            .ok_or_else(|| DomainError::UnresolvableNameserver(name.to_string()))
    }
}
