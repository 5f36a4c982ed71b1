//! TrustVC Dashboard HTTP Server Binary
//!
//! This is the main entry point for the dashboard metrics REST API.
//! It loads the scaling configuration, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin trustvc-dashboard-server
//!
//! # With an explicit configuration file
//! DASHBOARD_CONFIG=./dashboard.toml cargo run --bin trustvc-dashboard-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Path to a TOML config file (default: search `dashboard.toml`)
//! - `HOST`: Server host (overrides `[server].host`, default: 0.0.0.0)
//! - `PORT`: Server port (overrides `[server].port`, default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use trustvc_dashboard::config::DashboardConfig;
use trustvc_dashboard::engine::MetricsEngine;
use trustvc_dashboard::http::{create_router, AppState};

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

    info!("Starting TrustVC Dashboard HTTP Server");

    let mut config = match env::var("DASHBOARD_CONFIG") {
        Ok(path) => DashboardConfig::from_file(&path)?,
        Err(_) => DashboardConfig::from_default_location()?,
    };
    if let Ok(host) = env::var("HOST") {
        config.server.host = host;
    }
    if let Some(port) = env::var("PORT").ok().and_then(|s| s.parse().ok()) {
        config.server.port = port;
    }

    let engine = MetricsEngine::new(config.scaling)?;
    info!("Metrics engine initialized");

    let app = create_router(AppState::new(engine));

    let addr: SocketAddr = config.server.bind_address().parse()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
