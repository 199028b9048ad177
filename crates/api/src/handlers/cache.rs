use crate::{
    dto::{CacheStatsResponse, ClearCacheResponse},
    state::AppState,
};
use axum::{extract::State, Json};
use tracing::{debug, info, instrument};

#[instrument(skip(state), name = "api_get_cache_stats")]
pub async fn get_cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let stats = state.get_cache_stats.execute();

    debug!(
        address_entries = stats.address.entries,
        authority_entries = stats.authority.entries,
        address_hit_rate = stats.address.hit_rate(),
        "Cache statistics calculated"
    );

    Json(CacheStatsResponse {
        address: stats.address.into(),
        authority: stats.authority.into(),
    })
}

#[instrument(skip(state), name = "api_clear_cache")]
pub async fn clear_cache(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    let removed = state.clear_cache.execute();
    info!(removed = removed, "Cache cleared via API");

    Json(ClearCacheResponse {
        success: true,
        removed,
    })
}
