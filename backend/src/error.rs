//! Error types for metrics synthesis.

use chrono::NaiveDate;

/// Result type for metrics operations
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Error type for metrics operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    /// A filter, range, taxonomy or version value outside its closed set.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid date window: from {from} is after to {to}")]
    InvalidDateWindow { from: NaiveDate, to: NaiveDate },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl MetricsError {
    pub fn invalid_argument(kind: &str, value: &str) -> Self {
        MetricsError::InvalidArgument(format!("unknown {} '{}'", kind, value))
    }

    /// Stable machine-readable code, used by the HTTP layer.
    pub fn code(&self) -> &'static str {
        match self {
            MetricsError::InvalidArgument(_) => "INVALID_ARGUMENT",
            MetricsError::InvalidDateWindow { .. } => "INVALID_DATE_WINDOW",
            MetricsError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}
