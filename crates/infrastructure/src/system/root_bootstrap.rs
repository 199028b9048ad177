use async_trait::async_trait;
use dashmap::DashMap;
use rootwalk_application::ports::RootBootstrap;
use rootwalk_domain::DomainError;
use rustc_hash::FxBuildHasher;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tokio::net::lookup_host;
use tracing::info;

/// Finds the root server address through the host's stub resolver, once per
/// root name. A configured address bypasses the lookup.
pub struct SystemRootBootstrap {
    fixed_address: Option<Ipv4Addr>,
    resolved: DashMap<Arc<str>, Ipv4Addr, FxBuildHasher>,
}

impl SystemRootBootstrap {
    pub fn new(fixed_address: Option<Ipv4Addr>) -> Self {
        Self {
            fixed_address,
            resolved: DashMap::with_hasher(FxBuildHasher::default()),
        }
    }

    async fn lookup(root_server: &str) -> Result<Ipv4Addr, DomainError> {
        let host = root_server.trim_end_matches('.');
        let addresses = lookup_host((host, 53))
            .await
            .map_err(|e| DomainError::BootstrapFailed(format!("{}: {}", root_server, e)))?;

        addresses
            .filter_map(|addr| match addr.ip() {
                IpAddr::V4(ip) => Some(ip),
                IpAddr::V6(_) => None,
            })
            .next()
            .ok_or_else(|| {
                DomainError::BootstrapFailed(format!("{} has no IPv4 address", root_server))
            })
    }
}

#[async_trait]
impl RootBootstrap for SystemRootBootstrap {
    async fn root_address(&self, root_server: &str) -> Result<Ipv4Addr, DomainError> {
        if let Some(ip) = self.fixed_address {
            return Ok(ip);
        }
        if let Some(ip) = self.resolved.get(root_server) {
            return Ok(*ip);
        }

        let ip = Self::lookup(root_server).await?;
        info!(root_server = %root_server, address = %ip, "Root server bootstrapped");
        self.resolved.insert(Arc::from(root_server), ip);
        Ok(ip)
    }
}
