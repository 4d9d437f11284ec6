//! Hearsay Daemon - member-message question answering service.
//!
//! Answers natural-language questions about community members by mining
//! their chat messages with deterministic, rule-based heuristics.

use anyhow::Result;
use hearsayd::{config::HearsaydConfig, server};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Hearsay Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = HearsaydConfig::load();

    server::run(config).await
}
