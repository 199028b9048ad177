mod clear;
mod get_stats;

pub use clear::ClearCacheUseCase;
pub use get_stats::{CacheStats, GetCacheStatsUseCase};
