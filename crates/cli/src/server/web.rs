use axum::http::HeaderValue;
use rootwalk_api::{create_api_routes, AppState};
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub async fn start_web_server(
    bind_addr: SocketAddr,
    state: AppState,
    cors_allowed_origins: &[String],
) -> anyhow::Result<()> {
    let app = create_api_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_allowed_origins));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(bind_address = %bind_addr, "Web server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web server stopped");
    Ok(())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    info!("Shutdown signal received");
}
