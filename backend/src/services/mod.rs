//! Service layer: the metric generators.
//!
//! Each service is a pure function over static seed tables. Scaling
//! multipliers and randomness are passed in explicitly so the
//! [`crate::engine::MetricsEngine`] can bind them from configuration.

pub mod distributions;
pub mod geo_activity;
pub mod trends;
pub mod versions;

pub use distributions::compute_distribution;
pub use geo_activity::compute_geo_activity;
pub use trends::{compute_activity, compute_integrations};
pub use versions::{compute_version_table, group_by_major, latest_version};

/// Rounds to the nearest integer, halves toward positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Scales a non-negative seed value and rounds once.
pub(crate) fn scale_count(value: f64, multiplier: f64) -> u64 {
    round_half_up(value * multiplier).max(0.0) as u64
}
