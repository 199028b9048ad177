use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport used for queries to nameservers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportProtocol {
    /// Length-prefixed DNS over TCP
    #[default]
    Tcp,
    /// DNS over UDP, retried over TCP when the reply is truncated
    Udp,
}

impl fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportProtocol::Tcp => f.write_str("tcp"),
            TransportProtocol::Udp => f.write_str("udp"),
        }
    }
}

/// Iterative resolution settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Root server hostname the walk starts from
    #[serde(default = "default_root_server")]
    pub root_server: String,

    /// Fixed root server address; skips the bootstrap lookup when set
    #[serde(default)]
    pub root_server_address: Option<String>,

    #[serde(default)]
    pub protocol: TransportProtocol,

    /// Nameserver port (default: 53)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-query timeout applied by the transport
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Referrals followed before a walk is abandoned
    #[serde(default = "default_max_referrals")]
    pub max_referrals: usize,

    /// Depth limit for nested glueless / alias resolutions
    #[serde(default = "default_max_nested_depth")]
    pub max_nested_depth: usize,
}

fn default_root_server() -> String {
    "a.root-servers.net.".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_max_referrals() -> usize {
    32
}

fn default_max_nested_depth() -> usize {
    8
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            root_server_address: None,
            protocol: TransportProtocol::default(),
            port: default_port(),
            query_timeout_ms: default_query_timeout_ms(),
            max_referrals: default_max_referrals(),
            max_nested_depth: default_max_nested_depth(),
        }
    }
}
