pub mod cache;
pub mod forwarding;
pub mod transport;
pub mod upstream;

pub use cache::{CacheMetrics, InMemoryAddressCache, InMemoryAuthorityCache};
pub use upstream::DnsQueryTransport;
