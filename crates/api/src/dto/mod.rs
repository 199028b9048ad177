pub mod cache;
pub mod resolve;

pub use cache::{CacheStatsResponse, CacheTableResponse, ClearCacheResponse};
pub use resolve::{BindingDto, ResolveQuery, ResolveResponse, TraceEntryDto};
