use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::net::Ipv4Addr;

/// Turns the configured root server hostname into the address the walk
/// starts from. This is an ordinary lookup, not part of the iteration.
#[async_trait]
pub trait RootBootstrap: Send + Sync {
    async fn root_address(&self, root_server: &str) -> Result<Ipv4Addr, DomainError>;
}
