use super::{map_io_error, with_timeout, DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use rootwalk_domain::DomainError;
use std::net::SocketAddrV4;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP: one connection per query, each message framed by a
/// two-byte big-endian length.
pub struct TcpTransport {
    server_addr: SocketAddrV4,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddrV4) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Bytes, DomainError> {
        let server = *self.server_addr.ip();

        let len = u16::try_from(message_bytes.len()).map_err(|_| {
            DomainError::IoError(format!(
                "query of {} bytes does not fit a TCP frame",
                message_bytes.len()
            ))
        })?;

        let mut stream = TcpStream::connect(self.server_addr)
            .await
            .map_err(|e| map_io_error(server, e))?;

        let mut framed = Vec::with_capacity(message_bytes.len() + 2);
        framed.extend_from_slice(&len.to_be_bytes());
        framed.extend_from_slice(message_bytes);
        stream
            .write_all(&framed)
            .await
            .map_err(|e| map_io_error(server, e))?;

        debug!(server = %self.server_addr, bytes_sent = message_bytes.len(), "TCP query sent");

        let mut len_buf = [0u8; 2];
        stream
            .read_exact(&mut len_buf)
            .await
            .map_err(|e| map_io_error(server, e))?;
        let response_len = u16::from_be_bytes(len_buf) as usize;

        let mut response = vec![0u8; response_len];
        stream
            .read_exact(&mut response)
            .await
            .map_err(|e| map_io_error(server, e))?;

        debug!(server = %self.server_addr, bytes_received = response_len, "TCP response received");

        Ok(Bytes::from(response))
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bytes = with_timeout(*self.server_addr.ip(), timeout, self.exchange(message_bytes)).await?;
        Ok(TransportResponse {
            bytes,
            protocol_used: "TCP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}
