//! HTTP server for hearsayd.

use crate::config::HearsaydConfig;
use crate::data_client::MessageClient;
use crate::routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub messages: MessageClient,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: &HearsaydConfig) -> Self {
        Self {
            messages: MessageClient::new(
                config.upstream.messages_url.clone(),
                Duration::from_secs(config.upstream.fetch_timeout_secs),
            ),
            start_time: Instant::now(),
        }
    }
}

/// Run the HTTP server
pub async fn run(config: HearsaydConfig) -> Result<()> {
    let state = Arc::new(AppState::new(&config));

    let app = Router::new()
        .merge(routes::ask_routes())
        .merge(routes::health_routes())
        .merge(routes::debug_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.server.listen_addr).await?;
    info!("  Listening on http://{}", config.server.listen_addr);
    info!("  Upstream messages: {}", config.upstream.messages_url);

    axum::serve(listener, app).await?;
    Ok(())
}
