//! Exoplanet Explorer HTTP Server Binary
//!
//! Main entry point for the explorer REST API. It loads the configuration,
//! builds the catalog and the ML backend client, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin explorer-server
//!
//! # Point the proxy endpoints at another ML backend
//! BACKEND_URL=http://ml-host:8000 cargo run --bin explorer-server
//! ```
//!
//! # Environment Variables
//!
//! - `EXPLORER_CONFIG`: Path to an `explorer.toml` (default: searched)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `BACKEND_URL` / `NEXT_PUBLIC_BACKEND_URL`: ML backend base URL
//! - `BACKEND_TIMEOUT_SECS`: ML backend request timeout
//! - `MOCK_ANALYSIS_DELAY_MS`: Simulated delay of `/api/analyze`
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use exoplanet_explorer::config::ExplorerConfig;
use exoplanet_explorer::http::{create_router, AppState};
use exoplanet_explorer::models::Catalog;
use exoplanet_explorer::services::proxy::HttpBackend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Exoplanet Explorer HTTP Server");

    let config = ExplorerConfig::load()?;

    let catalog = Catalog::seed();
    info!("Catalog loaded with {} exoplanets", catalog.len());

    let backend = HttpBackend::new(&config.backend.base_url, config.backend_timeout())?;
    info!("Proxying ML requests to {}", backend.base_url());

    let state = AppState::from_config(&config, catalog, Arc::new(backend));
    let app = create_router(state);

    // Host names such as `localhost` are resolved by the bind itself.
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    let addr = listener.local_addr()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
