//! Value records returned by the generators.
//!
//! Every record is created fresh on each query call and owned by the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Issuance vs verification for one time bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// `M/D` for daily buckets, month abbreviation otherwise.
    pub label: String,
    pub issuance: u64,
    pub verification: u64,
}

/// Active integrations for one time bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationPoint {
    pub label: String,
    pub integrations: u64,
    /// Month-over-month growth in percent; may be negative.
    pub growth_pct: i64,
}

crate::define_str_enum!(
    /// Presentation color token for a chart series.
    ChartColor, "chart color" {
        Chart1 => "chart-1",
        Chart2 => "chart-2",
        Chart3 => "chart-3",
        Chart4 => "chart-4",
        Chart5 => "chart-5",
    }
);

impl ChartColor {
    /// CSS expression resolving the token against the active theme.
    pub fn css(&self) -> String {
        format!("hsl(var(--{}))", self.as_str())
    }
}

/// One category share in a pie chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistributionSlice {
    pub name: &'static str,
    /// Percentage of the whole, 0–100.
    pub value: u32,
    pub color: ChartColor,
}

/// Issuance and verification breakdowns for one taxonomy under one filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistributionPair {
    pub issuance: &'static [DistributionSlice],
    pub verification: &'static [DistributionSlice],
}

/// Activity aggregated at one map location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub country: String,
    /// `(longitude, latitude)` in degrees.
    pub coordinates: (f64, f64),
    pub issuance: u64,
    pub verification: u64,
}

impl GeoPoint {
    pub const MIN_MARKER_RADIUS: f64 = 5.0;
    pub const MAX_MARKER_RADIUS: f64 = 20.0;

    /// Map marker radius: combined activity / 50, clamped to [5, 20].
    pub fn marker_radius(&self) -> f64 {
        let total = (self.issuance + self.verification) as f64;
        (total / 50.0).clamp(Self::MIN_MARKER_RADIUS, Self::MAX_MARKER_RADIUS)
    }
}

crate::define_str_enum!(
    /// Support status of a released version.
    VersionStatus, "version status" {
        Current => "current",
        Stable => "stable",
        Deprecated => "deprecated",
        Legacy => "legacy",
    }
);

impl VersionStatus {
    /// Badge style the version table renders for this status.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            VersionStatus::Current => "default",
            VersionStatus::Stable => "secondary",
            VersionStatus::Deprecated => "outline",
            VersionStatus::Legacy => "destructive",
        }
    }
}

/// Active instances of one released version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    /// `vMAJOR.MINOR.PATCH`
    pub version: String,
    pub instances: u64,
    pub release_date: NaiveDate,
    pub status: VersionStatus,
}

impl VersionRecord {
    /// Leading `vMAJOR` token: everything before the first `.`.
    pub fn major_key(&self) -> &str {
        self.version.split('.').next().unwrap_or_default()
    }
}

/// Version records sharing a leading `vMAJOR` token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGroup {
    /// `vN`, as shown in the table section header.
    pub key: String,
    pub records: Vec<VersionRecord>,
}
