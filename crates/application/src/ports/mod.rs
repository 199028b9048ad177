pub mod binding_cache;
pub mod clock;
pub mod query_transport;
pub mod root_bootstrap;

pub use binding_cache::{AddressCache, AuthorityCache, CacheTableStats};
pub use clock::Clock;
pub use query_transport::{QueryResponse, QueryTransport};
pub use root_bootstrap::RootBootstrap;
