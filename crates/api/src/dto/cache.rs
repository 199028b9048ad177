use rootwalk_application::ports::CacheTableStats;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct CacheTableResponse {
    pub total_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub lazy_evictions: u64,
    pub hit_rate: f64,
}

impl From<CacheTableStats> for CacheTableResponse {
    fn from(stats: CacheTableStats) -> Self {
        Self {
            total_entries: stats.entries,
            hits: stats.hits,
            misses: stats.misses,
            insertions: stats.insertions,
            lazy_evictions: stats.lazy_evictions,
            hit_rate: stats.hit_rate(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CacheStatsResponse {
    pub address: CacheTableResponse,
    pub authority: CacheTableResponse,
}

#[derive(Serialize, Debug, Clone)]
pub struct ClearCacheResponse {
    pub success: bool,
    pub removed: usize,
}
