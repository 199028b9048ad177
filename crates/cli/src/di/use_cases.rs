use super::DnsServices;
use rootwalk_api::AppState;
use rootwalk_application::use_cases::{
    ClearCacheUseCase, GetCacheStatsUseCase, ResolveHostnameUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub resolve_hostname: Arc<ResolveHostnameUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
    pub clear_cache: Arc<ClearCacheUseCase>,
}

impl UseCases {
    pub fn new(services: &DnsServices) -> Self {
        Self {
            resolve_hostname: Arc::new(ResolveHostnameUseCase::new(services.resolver.clone())),
            get_cache_stats: Arc::new(GetCacheStatsUseCase::new(
                services.address_cache.clone(),
                services.authority_cache.clone(),
            )),
            clear_cache: Arc::new(ClearCacheUseCase::new(
                services.address_cache.clone(),
                services.authority_cache.clone(),
            )),
        }
    }

    pub fn into_app_state(self) -> AppState {
        AppState {
            resolve_hostname: self.resolve_hostname,
            get_cache_stats: self.get_cache_stats,
            clear_cache: self.clear_cache,
        }
    }
}
