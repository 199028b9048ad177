use rootwalk_application::use_cases::{
    ClearCacheUseCase, GetCacheStatsUseCase, ResolveHostnameUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve_hostname: Arc<ResolveHostnameUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
    pub clear_cache: Arc<ClearCacheUseCase>,
}
