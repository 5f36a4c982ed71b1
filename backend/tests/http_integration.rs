//! Integration tests for the HTTP API.
//!
//! Requests are driven through the router with `tower::ServiceExt::oneshot`,
//! so no socket is bound.

#![cfg(feature = "http-server")]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use trustvc_dashboard::http::{create_router, AppState};

fn app() -> Router {
    create_router(AppState::default())
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_filters_listing() {
    let (status, body) = get("/v1/filters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filters"].as_array().unwrap().len(), 3);
    assert_eq!(body["filters"][2]["value"], "etr");
    assert_eq!(body["trendRanges"].as_array().unwrap().len(), 6);
    assert_eq!(body["geoRanges"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_activity_defaults_to_daily() {
    let (status, body) = get("/v1/activity").await;
    assert_eq!(status, StatusCode::OK);
    let points = body.as_array().unwrap();
    assert_eq!(points.len(), 30);
    assert!(points[0]["issuance"].is_u64());
    assert!(points[0]["verification"].is_u64());
}

#[tokio::test]
async fn test_activity_monthly() {
    let (status, body) = get("/v1/activity?filter=verifiable-docs&range=3M").await;
    assert_eq!(status, StatusCode::OK);
    let points = body.as_array().unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[2]["label"], "Dec");
    assert_eq!(points[2]["issuance"], 3500);
    assert_eq!(points[2]["verification"], 4340);
}

#[tokio::test]
async fn test_integrations_growth_key() {
    let (status, body) = get("/v1/integrations?range=1Y").await;
    assert_eq!(status, StatusCode::OK);
    let points = body.as_array().unwrap();
    assert_eq!(points.len(), 12);
    assert_eq!(points[4]["growthPct"], -10);
    assert_eq!(points[4]["integrations"], 55);
}

#[tokio::test]
async fn test_unknown_filter_rejected() {
    let (status, body) = get("/v1/activity?filter=bogus").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
    assert!(body["message"].as_str().unwrap().contains("bogus"));
}

#[tokio::test]
async fn test_geo_range_on_trend_endpoint_rejected() {
    let (status, body) = get("/v1/integrations?range=1D").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_distribution_by_taxonomy() {
    let (status, body) = get("/v1/distributions/cryptosuite?filter=etr").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["issuance"][0]["name"], "Ed25519");
    assert_eq!(body["issuance"][0]["value"], 60);
    assert_eq!(body["issuance"][0]["color"], "chart-1");
    assert_eq!(body["issuance"][0]["fill"], "hsl(var(--chart-1))");
    assert_eq!(
        body["issuance"].as_array().unwrap().len(),
        body["verification"].as_array().unwrap().len()
    );
}

#[tokio::test]
async fn test_unknown_taxonomy_rejected() {
    let (status, body) = get("/v1/distributions/signature-scheme").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_geo_activity() {
    let (status, body) = get("/v1/geo-activity?range=1D").await;
    assert_eq!(status, StatusCode::OK);
    let points = body.as_array().unwrap();
    assert_eq!(points.len(), 10);
    assert_eq!(points[0]["country"], "USA");
    assert_eq!(points[0]["issuance"], 120);
    assert_eq!(points[0]["coordinates"][0], -95.7129);
}

#[tokio::test]
async fn test_versions_with_window() {
    let (status, body) = get("/v1/versions?from=2025-08-01&to=2025-12-31").await;
    assert_eq!(status, StatusCode::OK);
    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["releaseDate"], "2025-12-01");
    assert_eq!(records[0]["status"], "current");
    assert_eq!(records[0]["badge"], "default");
    assert_eq!(records[2]["badge"], "secondary");
    assert_eq!(body["latest"], "v2.4.1");
}

#[tokio::test]
async fn test_versions_empty_window() {
    let (status, body) = get("/v1/versions?from=2023-01-01&to=2023-12-31").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["records"].as_array().unwrap().is_empty());
    assert!(body["latest"].is_null());
}

#[tokio::test]
async fn test_versions_reversed_window_rejected() {
    let (status, body) = get("/v1/versions?from=2025-12-31&to=2025-01-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATE_WINDOW");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_versions_half_open_window_rejected() {
    let (status, body) = get("/v1/versions?from=2025-01-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_version_groups() {
    let (status, body) = get("/v1/versions/grouped?filter=etr").await;
    assert_eq!(status, StatusCode::OK);
    let groups = body.as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["key"], "v2");
    assert_eq!(groups[0]["records"].as_array().unwrap().len(), 8);
    // 1250 * 0.4
    assert_eq!(groups[0]["records"][0]["instances"], 500);
    assert_eq!(groups[0]["records"][7]["badge"], "destructive");
}
