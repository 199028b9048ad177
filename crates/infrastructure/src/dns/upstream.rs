use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::{self, TransportResponse};
use async_trait::async_trait;
use rootwalk_application::ports::{QueryResponse, QueryTransport};
use rootwalk_domain::config::{ResolverConfig, TransportProtocol};
use rootwalk_domain::{DomainError, RecordType};
use std::net::{Ipv4Addr, SocketAddrV4};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// [`QueryTransport`] speaking plain DNS to one server per query.
pub struct DnsQueryTransport {
    protocol: TransportProtocol,
    port: u16,
    timeout: Duration,
}

impl DnsQueryTransport {
    pub fn new(protocol: TransportProtocol, port: u16, timeout: Duration) -> Self {
        Self {
            protocol,
            port,
            timeout,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(
            config.protocol,
            config.port,
            Duration::from_millis(config.query_timeout_ms),
        )
    }

    async fn exchange(
        &self,
        protocol: TransportProtocol,
        server: SocketAddrV4,
        query_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let transport = transport::create_transport(protocol, server);
        transport.send(query_bytes, timeout).await.inspect_err(|e| {
            warn!(
                server = %server,
                protocol = transport.protocol_name(),
                error = %e,
                "Upstream exchange failed"
            )
        })
    }
}

#[async_trait]
impl QueryTransport for DnsQueryTransport {
    async fn send_query(
        &self,
        name: &str,
        record_type: RecordType,
        server: Ipv4Addr,
    ) -> Result<QueryResponse, DomainError> {
        let start = Instant::now();
        let server_addr = SocketAddrV4::new(server, self.port);
        let (id, query_bytes) = MessageBuilder::build_query(name, record_type)?;

        let reply = self
            .exchange(self.protocol, server_addr, &query_bytes, self.timeout)
            .await?;
        let mut protocol_used = reply.protocol_used;
        let mut parsed = ResponseParser::parse_reply(&reply.bytes, id)?;

        if parsed.truncated && self.protocol == TransportProtocol::Udp {
            debug!(server = %server_addr, "Response truncated (TC bit), retrying via TCP");

            let remaining = self
                .timeout
                .checked_sub(start.elapsed())
                .unwrap_or(Duration::from_millis(500));
            let tcp_reply = self
                .exchange(TransportProtocol::Tcp, server_addr, &query_bytes, remaining)
                .await?;
            protocol_used = tcp_reply.protocol_used;
            parsed = ResponseParser::parse_reply(&tcp_reply.bytes, id)?;
        }

        debug!(
            server = %server_addr,
            name = %name,
            record_type = %record_type,
            protocol = protocol_used,
            rcode = ResponseParser::rcode_to_status(parsed.rcode),
            latency_ms = start.elapsed().as_millis() as u64,
            "Upstream query answered"
        );

        Ok(parsed.response)
    }
}
