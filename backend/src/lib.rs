//! # TrustVC Dashboard Backend
//!
//! Metrics synthesis for the TrustVC ecosystem dashboard.
//!
//! This crate produces the data behind every dashboard view: issuance and
//! verification trends, integration counts, cryptosuite and DID method
//! distributions, world map activity, and the version/instance table. All
//! values are synthesized in-process from fixed seed tables, scaled per
//! filter segment, and kept consistent across views for the same filter and
//! time range.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Selectors (filter segment, ranges, taxonomy) and value records
//! - [`services`]: Pure generators over the seed tables
//! - [`engine`]: [`MetricsEngine`](engine::MetricsEngine) binding scaling tables to the services
//! - [`config`]: TOML configuration for scaling tables and the server
//! - [`random`]: Injectable randomness for daily-granularity jitter
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use trustvc_dashboard::engine::generate_geo_activity;
//! use trustvc_dashboard::models::{FilterSegment, GeoRange};
//!
//! let points = generate_geo_activity(FilterSegment::All, GeoRange::OneDay);
//! assert_eq!(points[0].country, "USA");
//! assert_eq!(points[0].issuance, 120);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod random;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use engine::{
    generate_distribution, generate_geo_activity, generate_integrations, generate_trend,
    generate_version_table, MetricsEngine,
};
pub use error::{MetricsError, MetricsResult};
