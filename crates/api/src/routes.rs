use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/get-a-records", get(handlers::get_a_records))
        .route("/cache/stats", get(handlers::get_cache_stats))
        .route("/cache", delete(handlers::clear_cache))
        .with_state(state)
}
