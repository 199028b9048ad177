pub mod cache;
pub mod resolve;

pub use cache::{CacheStats, ClearCacheUseCase, GetCacheStatsUseCase};
pub use resolve::ResolveHostnameUseCase;
