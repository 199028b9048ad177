#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// What the mock server does with one query.
pub enum MockReply {
    Bytes(Vec<u8>),
    /// Close the connection without answering
    Close,
    /// Keep the connection open and never answer
    Hang,
}

type Responder = Arc<dyn Fn(&[u8]) -> MockReply + Send + Sync>;

/// DNS server on 127.0.0.1 answering each query with `respond`.
///
/// TCP always listens; UDP listens on the same port when requested.
pub struct MockDnsServer {
    addr: SocketAddr,
    tcp_queries: Arc<AtomicUsize>,
    udp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start_tcp<F>(respond: F) -> std::io::Result<Self>
    where
        F: Fn(&[u8]) -> MockReply + Send + Sync + 'static,
    {
        Self::start(Arc::new(respond), None).await
    }

    /// TCP and UDP on one port, each with its own responder.
    pub async fn start_dual<T, U>(tcp: T, udp: U) -> std::io::Result<Self>
    where
        T: Fn(&[u8]) -> MockReply + Send + Sync + 'static,
        U: Fn(&[u8]) -> MockReply + Send + Sync + 'static,
    {
        Self::start(Arc::new(tcp), Some(Arc::new(udp) as Responder)).await
    }

    async fn start(tcp: Responder, udp: Option<Responder>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let udp_socket = match udp {
            Some(responder) => Some((UdpSocket::bind(addr).await?, responder)),
            None => None,
        };

        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let udp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let tcp_counter = tcp_queries.clone();
        let udp_counter = udp_queries.clone();
        tokio::spawn(async move {
            let udp_loop = async {
                let Some((socket, responder)) = udp_socket else {
                    return std::future::pending::<()>().await;
                };
                let mut buf = vec![0u8; 512];
                loop {
                    let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                        continue;
                    };
                    udp_counter.fetch_add(1, Ordering::SeqCst);
                    if let MockReply::Bytes(reply) = responder(&buf[..len]) {
                        let _ = socket.send_to(&reply, peer).await;
                    }
                }
            };

            let tcp_loop = async {
                loop {
                    let Ok((stream, _)) = listener.accept().await else {
                        continue;
                    };
                    tcp_counter.fetch_add(1, Ordering::SeqCst);
                    let responder = tcp.clone();
                    tokio::spawn(Self::serve_tcp(stream, responder));
                }
            };

            tokio::select! {
                _ = &mut shutdown_rx => {}
                _ = udp_loop => {}
                _ = tcp_loop => {}
            }
        });

        Ok(Self {
            addr,
            tcp_queries,
            udp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    async fn serve_tcp(mut stream: tokio::net::TcpStream, responder: Responder) {
        let mut len_buf = [0u8; 2];
        if stream.read_exact(&mut len_buf).await.is_err() {
            return;
        }
        let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
        if stream.read_exact(&mut query).await.is_err() {
            return;
        }

        match responder(&query) {
            MockReply::Bytes(reply) => {
                let _ = stream.write_all(&(reply.len() as u16).to_be_bytes()).await;
                let _ = stream.write_all(&reply).await;
            }
            MockReply::Close => {}
            MockReply::Hang => {
                std::future::pending::<()>().await;
            }
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
