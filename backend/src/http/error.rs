//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::MetricsError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Rejected by a generator or selector parser
    Metrics(MetricsError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Metrics(e) => {
                let status = match e {
                    MetricsError::InvalidArgument(_) | MetricsError::InvalidDateWindow { .. } => {
                        StatusCode::BAD_REQUEST
                    }
                    MetricsError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                let body = match &e {
                    MetricsError::InvalidDateWindow { from, to } => ApiError::new(e.code(), e.to_string())
                        .with_details(format!("from={} to={}", from, to)),
                    _ => ApiError::new(e.code(), e.to_string()),
                };
                (status, body)
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<MetricsError> for AppError {
    fn from(err: MetricsError) -> Self {
        AppError::Metrics(err)
    }
}
