//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! [`MetricsEngine`](crate::engine::MetricsEngine) held in the app state.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Local;

use super::dto::{
    DistributionResponse, FilterQuery, FiltersResponse, GeoPoint, GeoQuery, HealthResponse,
    IntegrationPoint, TimeSeriesPoint, TrendQuery, VersionGroupView, VersionQuery,
    VersionTableResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::Taxonomy;
use crate::random::RngSource;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

/// GET /v1/filters
///
/// Filter segments and ranges the dashboard selectors offer.
pub async fn list_filters() -> HandlerResult<FiltersResponse> {
    Ok(Json(FiltersResponse::current()))
}

// =============================================================================
// Activity Overview
// =============================================================================

/// GET /v1/activity?filter=&range=
///
/// Issuance vs verification over time.
pub async fn get_activity(
    State(state): State<AppState>,
    Query(query): Query<TrendQuery>,
) -> HandlerResult<Vec<TimeSeriesPoint>> {
    let (filter, range) = query.selectors()?;
    tracing::debug!(%filter, %range, "activity requested");

    let mut rng = RngSource::from_entropy();
    let today = Local::now().date_naive();
    Ok(Json(state.engine.activity(filter, range, today, &mut rng)))
}

/// GET /v1/integrations?filter=&range=
///
/// Active integrations month over month.
pub async fn get_integrations(
    State(state): State<AppState>,
    Query(query): Query<TrendQuery>,
) -> HandlerResult<Vec<IntegrationPoint>> {
    let (filter, range) = query.selectors()?;
    tracing::debug!(%filter, %range, "integrations requested");

    let mut rng = RngSource::from_entropy();
    let today = Local::now().date_naive();
    Ok(Json(state.engine.integrations(filter, range, today, &mut rng)))
}

// =============================================================================
// Market Intelligence
// =============================================================================

/// GET /v1/distributions/{taxonomy}?filter=
pub async fn get_distribution(
    State(state): State<AppState>,
    Path(taxonomy): Path<String>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<DistributionResponse> {
    let taxonomy: Taxonomy = taxonomy.parse()?;
    let filter = query.filter()?;
    tracing::debug!(%taxonomy, %filter, "distribution requested");

    Ok(Json(DistributionResponse::from(
        state.engine.distribution(taxonomy, filter),
    )))
}

// =============================================================================
// Activity Heatmap
// =============================================================================

/// GET /v1/geo-activity?filter=&range=
pub async fn get_geo_activity(
    State(state): State<AppState>,
    Query(query): Query<GeoQuery>,
) -> HandlerResult<Vec<GeoPoint>> {
    let (filter, range) = query.selectors()?;
    tracing::debug!(%filter, %range, "geo activity requested");

    Ok(Json(state.engine.geo_activity(filter, range)))
}

// =============================================================================
// Version Distribution
// =============================================================================

/// GET /v1/versions?filter=&from=&to=
///
/// Version table plus the latest-release marker.
pub async fn get_versions(
    State(state): State<AppState>,
    Query(query): Query<VersionQuery>,
) -> HandlerResult<VersionTableResponse> {
    let filter = query.filter()?;
    let window = query.window()?;
    tracing::debug!(%filter, ?window, "version table requested");

    let records = state.engine.version_table(filter, window.as_ref());
    Ok(Json(VersionTableResponse::new(records)))
}

/// GET /v1/versions/grouped?filter=&from=&to=
pub async fn get_version_groups(
    State(state): State<AppState>,
    Query(query): Query<VersionQuery>,
) -> HandlerResult<Vec<VersionGroupView>> {
    let filter = query.filter()?;
    let window = query.window()?;
    tracing::debug!(%filter, ?window, "grouped version table requested");

    let groups = state.engine.version_groups(filter, window.as_ref());
    Ok(Json(groups.into_iter().map(VersionGroupView::from).collect()))
}
