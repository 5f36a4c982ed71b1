//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The dashboard is served from a different origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/filters", get(handlers::list_filters))
        // Activity overview
        .route("/activity", get(handlers::get_activity))
        .route("/integrations", get(handlers::get_integrations))
        // Market intelligence
        .route("/distributions/{taxonomy}", get(handlers::get_distribution))
        // Activity heatmap
        .route("/geo-activity", get(handlers::get_geo_activity))
        // Version distribution
        .route("/versions", get(handlers::get_versions))
        .route("/versions/grouped", get(handlers::get_version_groups));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
