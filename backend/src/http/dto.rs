//! Data Transfer Objects for the HTTP API.
//!
//! Query parameters arrive as raw strings and are parsed into the closed
//! selectors here, so unknown values surface as `INVALID_ARGUMENT` bodies.
//! Series records are re-exported from the models module since they
//! already derive Serialize. Distribution and version responses add the
//! presentation fields the front end renders (slice fill, status badge).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, MetricsResult};
use crate::models::{
    ChartColor, DateWindow, DistributionPair, DistributionSlice, FilterSegment, GeoRange,
    TrendRange, VersionGroup, VersionRecord,
};

pub use crate::models::{GeoPoint, IntegrationPoint, TimeSeriesPoint};

fn parse_or_default<T>(raw: Option<&str>) -> MetricsResult<T>
where
    T: std::str::FromStr<Err = MetricsError> + Default,
{
    raw.map_or_else(|| Ok(T::default()), |value| value.parse())
}

fn parse_date(field: &str, raw: Option<&str>) -> MetricsResult<Option<NaiveDate>> {
    raw.map(|value| {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
            MetricsError::InvalidArgument(format!(
                "'{}' must be an ISO date (YYYY-MM-DD), got '{}'",
                field, value
            ))
        })
    })
    .transpose()
}

/// Query parameters for endpoints selected by filter only.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

impl FilterQuery {
    pub fn filter(&self) -> MetricsResult<FilterSegment> {
        parse_or_default(self.filter.as_deref())
    }
}

/// Query parameters for activity and integrations endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrendQuery {
    /// Filter segment (default: all)
    #[serde(default)]
    pub filter: Option<String>,
    /// Trend range (default: 1M)
    #[serde(default)]
    pub range: Option<String>,
}

impl TrendQuery {
    pub fn selectors(&self) -> MetricsResult<(FilterSegment, TrendRange)> {
        Ok((
            parse_or_default(self.filter.as_deref())?,
            parse_or_default(self.range.as_deref())?,
        ))
    }
}

/// Query parameters for the geo activity endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeoQuery {
    /// Filter segment (default: all)
    #[serde(default)]
    pub filter: Option<String>,
    /// Geo range (default: 1M)
    #[serde(default)]
    pub range: Option<String>,
}

impl GeoQuery {
    pub fn selectors(&self) -> MetricsResult<(FilterSegment, GeoRange)> {
        Ok((
            parse_or_default(self.filter.as_deref())?,
            parse_or_default(self.range.as_deref())?,
        ))
    }
}

/// Query parameters for the version endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VersionQuery {
    #[serde(default)]
    pub filter: Option<String>,
    /// Inclusive lower bound, `YYYY-MM-DD`
    #[serde(default)]
    pub from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`
    #[serde(default)]
    pub to: Option<String>,
}

impl VersionQuery {
    pub fn filter(&self) -> MetricsResult<FilterSegment> {
        parse_or_default(self.filter.as_deref())
    }

    pub fn window(&self) -> MetricsResult<Option<DateWindow>> {
        DateWindow::from_bounds(
            parse_date("from", self.from.as_deref())?,
            parse_date("to", self.to.as_deref())?,
        )
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}

/// One entry on the global filter bar.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOption {
    pub value: FilterSegment,
    pub label: &'static str,
}

/// Selectors the front end renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersResponse {
    pub filters: Vec<FilterOption>,
    pub trend_ranges: &'static [TrendRange],
    pub geo_ranges: &'static [GeoRange],
}

impl FiltersResponse {
    pub fn current() -> Self {
        Self {
            filters: FilterSegment::ALL
                .iter()
                .map(|filter| FilterOption {
                    value: *filter,
                    label: filter.label(),
                })
                .collect(),
            trend_ranges: TrendRange::ALL,
            geo_ranges: GeoRange::ALL,
        }
    }
}

/// One pie chart slice with its resolved fill.
#[derive(Debug, Clone, Serialize)]
pub struct SliceView {
    pub name: &'static str,
    pub value: u32,
    pub color: ChartColor,
    /// CSS expression for the slice fill
    pub fill: String,
}

impl From<&DistributionSlice> for SliceView {
    fn from(slice: &DistributionSlice) -> Self {
        Self {
            name: slice.name,
            value: slice.value,
            color: slice.color,
            fill: slice.color.css(),
        }
    }
}

/// Issuance and verification breakdowns for one taxonomy.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionResponse {
    pub issuance: Vec<SliceView>,
    pub verification: Vec<SliceView>,
}

impl From<&DistributionPair> for DistributionResponse {
    fn from(pair: &DistributionPair) -> Self {
        Self {
            issuance: pair.issuance.iter().map(SliceView::from).collect(),
            verification: pair.verification.iter().map(SliceView::from).collect(),
        }
    }
}

/// Version table row with the badge style for its status.
#[derive(Debug, Clone, Serialize)]
pub struct VersionRow {
    #[serde(flatten)]
    pub record: VersionRecord,
    pub badge: &'static str,
}

impl From<VersionRecord> for VersionRow {
    fn from(record: VersionRecord) -> Self {
        let badge = record.status.badge_variant();
        Self { record, badge }
    }
}

/// Version table with the latest-release marker.
#[derive(Debug, Clone, Serialize)]
pub struct VersionTableResponse {
    pub records: Vec<VersionRow>,
    /// Version string of the first rendered row, if any
    pub latest: Option<String>,
}

impl VersionTableResponse {
    pub fn new(records: Vec<VersionRecord>) -> Self {
        let latest = crate::services::latest_version(&records).map(|r| r.version.clone());
        Self {
            records: records.into_iter().map(VersionRow::from).collect(),
            latest,
        }
    }
}

/// Table section for one major version.
#[derive(Debug, Clone, Serialize)]
pub struct VersionGroupView {
    pub key: String,
    pub records: Vec<VersionRow>,
}

impl From<VersionGroup> for VersionGroupView {
    fn from(group: VersionGroup) -> Self {
        Self {
            key: group.key,
            records: group.records.into_iter().map(VersionRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Taxonomy, VersionStatus};

    #[test]
    fn test_trend_query_defaults() {
        let (filter, range) = TrendQuery::default().selectors().unwrap();
        assert_eq!(filter, FilterSegment::All);
        assert_eq!(range, TrendRange::OneMonth);
    }

    #[test]
    fn test_trend_query_rejects_geo_range() {
        let query = TrendQuery {
            filter: None,
            range: Some("5D".to_string()),
        };
        assert!(matches!(
            query.selectors(),
            Err(MetricsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_version_query_window() {
        let query = VersionQuery {
            filter: Some("etr".to_string()),
            from: Some("2025-08-01".to_string()),
            to: Some("2025-12-31".to_string()),
        };
        assert_eq!(query.filter().unwrap(), FilterSegment::Etr);
        let window = query.window().unwrap().unwrap();
        assert_eq!(window.from(), NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
    }

    #[test]
    fn test_version_query_bad_date() {
        let query = VersionQuery {
            filter: None,
            from: Some("08/01/2025".to_string()),
            to: Some("2025-12-31".to_string()),
        };
        assert!(matches!(query.window(), Err(MetricsError::InvalidArgument(_))));
    }

    fn row(version: &str, status: VersionStatus) -> VersionRecord {
        VersionRecord {
            version: version.to_string(),
            instances: 10,
            release_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            status,
        }
    }

    #[test]
    fn test_distribution_response_carries_fill() {
        let pair = crate::services::compute_distribution(Taxonomy::DidMethod, FilterSegment::All);
        let json = serde_json::to_value(DistributionResponse::from(pair)).unwrap();
        assert_eq!(json["issuance"][0]["name"], "did:web");
        assert_eq!(json["issuance"][0]["color"], "chart-4");
        assert_eq!(json["issuance"][0]["fill"], "hsl(var(--chart-4))");
    }

    #[test]
    fn test_version_row_flattens_record_with_badge() {
        let json = serde_json::to_value(VersionRow::from(row("v2.0.0", VersionStatus::Legacy))).unwrap();
        assert_eq!(json["version"], "v2.0.0");
        assert_eq!(json["releaseDate"], "2025-01-01");
        assert_eq!(json["status"], "legacy");
        assert_eq!(json["badge"], "destructive");
    }

    #[test]
    fn test_version_table_latest_is_first_row() {
        let response = VersionTableResponse::new(vec![
            row("v2.4.1", VersionStatus::Current),
            row("v2.4.0", VersionStatus::Stable),
        ]);
        assert_eq!(response.latest.as_deref(), Some("v2.4.1"));
        assert_eq!(response.records[0].badge, "default");
        assert_eq!(response.records[1].badge, "secondary");

        assert!(VersionTableResponse::new(Vec::new()).latest.is_none());
    }

    #[test]
    fn test_filters_response_shape() {
        let json = serde_json::to_value(FiltersResponse::current()).unwrap();
        assert_eq!(json["filters"][1]["value"], "verifiable-docs");
        assert_eq!(json["filters"][1]["label"], "Verifiable Docs");
        assert_eq!(json["trendRanges"][5], "ALL");
        assert_eq!(json["geoRanges"][0], "1D");
    }
}
