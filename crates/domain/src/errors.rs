use std::net::Ipv4Addr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Query to {server} timed out after {timeout_ms}ms")]
    TransportTimeout { server: Ipv4Addr, timeout_ms: u64 },

    #[error("Connection refused by {server}")]
    TransportConnectionRefused { server: Ipv4Addr },

    #[error("Connection reset by {server}")]
    TransportConnectionReset { server: Ipv4Addr },

    #[error("Answer from {server} has no record for queried name {name}")]
    MissingAnswerRecord { name: String, server: String },

    #[error("Referral from {server} has no usable delegation for {name}")]
    NoDelegation { name: String, server: String },

    #[error("Nameserver {0} has no address")]
    UnresolvableNameserver(String),

    #[error("Delegation walk for {name} exceeded {limit} referrals")]
    DelegationLoop { name: String, limit: usize },

    #[error("Alias chain for {0} loops")]
    AliasLoop(String),

    #[error("Nested resolution of {name} exceeded depth {limit}")]
    NestingTooDeep { name: String, limit: usize },

    #[error("Root server bootstrap failed: {0}")]
    BootstrapFailed(String),
}

impl DomainError {
    /// Failures raised by the transport collaborator rather than by the walk itself.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportConnectionReset { .. }
                | DomainError::IoError(_)
                | DomainError::InvalidDnsResponse(_)
        )
    }
}
