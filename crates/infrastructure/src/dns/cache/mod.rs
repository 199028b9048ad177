// Cache module: the two binding tables behind the application cache ports

pub mod address_cache;
pub mod authority_cache;
pub mod binding_table;
pub mod metrics;

pub use address_cache::InMemoryAddressCache;
pub use authority_cache::InMemoryAuthorityCache;
pub use binding_table::BindingTable;
pub use metrics::CacheMetrics;
