//! Application state for the HTTP server.

use std::sync::Arc;

use crate::engine::MetricsEngine;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Engine bound to the configured scaling tables
    pub engine: Arc<MetricsEngine>,
}

impl AppState {
    /// Create a new application state with the given engine.
    pub fn new(engine: MetricsEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MetricsEngine::default())
    }
}
