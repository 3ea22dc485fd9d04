// Dino Compare - Web Server
// Serves the comparison page; the data file loads in the background

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dino_compare::web::{router, spawn_catalog_load, AppState};
use dino_compare::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = env::args()
        .skip_while(|a| a != "--config")
        .nth(1)
        .map(PathBuf::from);

    let config = Config::load_or_default(config_path.as_deref())
        .context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🦖 Dino Compare - Web Server");

    // Create shared state; the submit button stays disabled until the load finishes
    let state = AppState::loading(config.clone());
    spawn_catalog_load(&state);

    let app = router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    info!("🚀 Server running on http://{}", config.bind_addr);
    info!("   API: http://{}/api/dinos", config.bind_addr);
    info!("   Press Ctrl+C to stop");

    axum::serve(listener, app)
        .await
        .context("Server stopped unexpectedly")?;

    Ok(())
}
