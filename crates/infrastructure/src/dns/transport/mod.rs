pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use bytes::Bytes;
use rootwalk_domain::config::TransportProtocol;
use rootwalk_domain::DomainError;
use std::future::Future;
use std::io;
use std::net::{Ipv4Addr, SocketAddrV4};
use std::time::Duration;

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Bytes,
    /// Which protocol was used
    pub protocol_used: &'static str,
}

/// Trait for sending raw DNS messages over the wire
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

/// Enum-dispatched transport, one per query.
pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(_) => "UDP",
            Self::Tcp(_) => "TCP",
        }
    }
}

pub fn create_transport(protocol: TransportProtocol, server_addr: SocketAddrV4) -> Transport {
    match protocol {
        TransportProtocol::Udp => Transport::Udp(udp::UdpTransport::new(server_addr)),
        TransportProtocol::Tcp => Transport::Tcp(tcp::TcpTransport::new(server_addr)),
    }
}

/// Run `exchange` under `timeout`, reporting expiry against `server`.
pub(crate) async fn with_timeout<T, F>(
    server: Ipv4Addr,
    timeout: Duration,
    exchange: F,
) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>>,
{
    tokio::time::timeout(timeout, exchange)
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server,
            timeout_ms: timeout.as_millis() as u64,
        })?
}

pub(crate) fn map_io_error(server: Ipv4Addr, error: io::Error) -> DomainError {
    match error.kind() {
        io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused { server },
        io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::BrokenPipe
        | io::ErrorKind::UnexpectedEof => DomainError::TransportConnectionReset { server },
        _ => DomainError::IoError(format!("{}: {}", server, error)),
    }
}
