use super::{map_io_error, with_timeout, DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use rootwalk_domain::DomainError;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP, one ephemeral socket per query.
///
/// A truncated reply is returned as is; the caller retries over TCP.
pub struct UdpTransport {
    server_addr: SocketAddrV4,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddrV4) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Bytes, DomainError> {
        let server = *self.server_addr.ip();

        let socket = UdpSocket::bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)))
            .await
            .map_err(|e| map_io_error(server, e))?;

        let bytes_sent = socket
            .send_to(message_bytes, self.server_addr)
            .await
            .map_err(|e| map_io_error(server, e))?;

        debug!(server = %self.server_addr, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        loop {
            let (bytes_received, from_addr) = socket
                .recv_from(&mut recv_buf)
                .await
                .map_err(|e| map_io_error(server, e))?;

            if from_addr != SocketAddr::V4(self.server_addr) {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source, ignoring"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);
            debug!(server = %self.server_addr, bytes_received = bytes_received, "UDP response received");
            return Ok(Bytes::from(recv_buf));
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bytes = with_timeout(*self.server_addr.ip(), timeout, self.exchange(message_bytes)).await?;
        Ok(TransportResponse {
            bytes,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
