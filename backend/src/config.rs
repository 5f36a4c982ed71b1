//! Dashboard configuration file support.
//!
//! Scaling tables and server settings are read from a TOML file. Every
//! section is optional and falls back to the built-in tables.
//!
//! ```toml
//! [scaling.activity]
//! all = 1.0
//! verifiable_docs = 0.7
//! etr = 0.3
//!
//! [scaling.geo_ranges]
//! one_day = 0.1
//!
//! [server]
//! port = 9090
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{MetricsError, MetricsResult};
use crate::models::{FilterSegment, GeoRange};

/// Multiplier per filter segment for one metric family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentMultipliers {
    pub all: f64,
    pub verifiable_docs: f64,
    pub etr: f64,
}

impl SegmentMultipliers {
    pub const fn new(all: f64, verifiable_docs: f64, etr: f64) -> Self {
        Self {
            all,
            verifiable_docs,
            etr,
        }
    }

    pub fn get(&self, filter: FilterSegment) -> f64 {
        match filter {
            FilterSegment::All => self.all,
            FilterSegment::VerifiableDocs => self.verifiable_docs,
            FilterSegment::Etr => self.etr,
        }
    }

    fn validate(&self, family: &str) -> MetricsResult<()> {
        for filter in FilterSegment::ALL {
            check_multiplier(&format!("scaling.{}.{}", family, filter), self.get(*filter))?;
        }
        // Segments are subsets of the whole.
        for filter in [FilterSegment::VerifiableDocs, FilterSegment::Etr] {
            if self.get(filter) > self.all {
                return Err(MetricsError::Configuration(format!(
                    "'scaling.{}.{}' ({}) must not exceed 'scaling.{}.all' ({})",
                    family,
                    filter,
                    self.get(filter),
                    family,
                    self.all
                )));
            }
        }
        Ok(())
    }
}

/// Severity multiplier per map range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoRangeMultipliers {
    pub one_day: f64,
    pub five_days: f64,
    pub one_month: f64,
    pub six_months: f64,
    pub one_year: f64,
}

impl Default for GeoRangeMultipliers {
    fn default() -> Self {
        Self {
            one_day: 0.1,
            five_days: 0.3,
            one_month: 0.5,
            six_months: 0.8,
            one_year: 1.0,
        }
    }
}

impl GeoRangeMultipliers {
    pub fn get(&self, range: GeoRange) -> f64 {
        match range {
            GeoRange::OneDay => self.one_day,
            GeoRange::FiveDays => self.five_days,
            GeoRange::OneMonth => self.one_month,
            GeoRange::SixMonths => self.six_months,
            GeoRange::OneYear => self.one_year,
        }
    }
}

fn default_activity() -> SegmentMultipliers {
    SegmentMultipliers::new(1.0, 0.7, 0.3)
}

fn default_integrations() -> SegmentMultipliers {
    SegmentMultipliers::new(1.0, 0.6, 0.4)
}

fn default_geo() -> SegmentMultipliers {
    SegmentMultipliers::new(1.0, 0.7, 0.3)
}

fn default_versions() -> SegmentMultipliers {
    SegmentMultipliers::new(1.0, 0.6, 0.4)
}

/// Scaling tables for every generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingConfig {
    #[serde(default = "default_activity")]
    pub activity: SegmentMultipliers,
    #[serde(default = "default_integrations")]
    pub integrations: SegmentMultipliers,
    #[serde(default = "default_geo")]
    pub geo: SegmentMultipliers,
    #[serde(default = "default_versions")]
    pub versions: SegmentMultipliers,
    #[serde(default)]
    pub geo_ranges: GeoRangeMultipliers,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            activity: default_activity(),
            integrations: default_integrations(),
            geo: default_geo(),
            versions: default_versions(),
            geo_ranges: GeoRangeMultipliers::default(),
        }
    }
}

impl ScalingConfig {
    /// Every multiplier must be finite and non-negative, and no segment
    /// multiplier may exceed the `all` multiplier of its table.
    pub fn validate(&self) -> MetricsResult<()> {
        self.activity.validate("activity")?;
        self.integrations.validate("integrations")?;
        self.geo.validate("geo")?;
        self.versions.validate("versions")?;
        for range in GeoRange::ALL {
            check_multiplier(&format!("scaling.geo_ranges.{}", range), self.geo_ranges.get(*range))?;
        }
        Ok(())
    }
}

fn check_multiplier(key: &str, value: f64) -> MetricsResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(MetricsError::Configuration(format!(
            "'{}' must be a finite, non-negative number (got {})",
            key, value
        )));
    }
    Ok(())
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dashboard configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub scaling: ScalingConfig,
    #[serde(default)]
    pub server: ServerSettings,
}

impl FromStr for DashboardConfig {
    type Err = MetricsError;

    fn from_str(content: &str) -> MetricsResult<Self> {
        let config: DashboardConfig = toml::from_str(content).map_err(|e| {
            MetricsError::Configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.scaling.validate()?;
        Ok(config)
    }
}

impl DashboardConfig {
    /// Load dashboard configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(DashboardConfig)` if successful
    /// * `Err(MetricsError::Configuration)` if the file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> MetricsResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            MetricsError::Configuration(format!("Failed to read config file: {}", e))
        })?;
        let config: DashboardConfig = content.parse()?;
        log::info!("Loaded dashboard config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load dashboard configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to the built-in defaults when no file exists.
    pub fn from_default_location() -> MetricsResult<Self> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in &search_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        log::warn!("No dashboard.toml found in standard locations, using built-in defaults");
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let scaling = ScalingConfig::default();
        assert_eq!(scaling.activity.get(FilterSegment::VerifiableDocs), 0.7);
        assert_eq!(scaling.activity.get(FilterSegment::Etr), 0.3);
        assert_eq!(scaling.integrations.get(FilterSegment::VerifiableDocs), 0.6);
        assert_eq!(scaling.versions.get(FilterSegment::Etr), 0.4);
        assert_eq!(scaling.geo.get(FilterSegment::All), 1.0);
        assert_eq!(scaling.geo_ranges.get(GeoRange::OneDay), 0.1);
        assert_eq!(scaling.geo_ranges.get(GeoRange::OneYear), 1.0);
        assert!(scaling.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: DashboardConfig = "".parse().unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_override() {
        let toml_str = r#"
            [scaling.activity]
            all = 1.0
            verifiable_docs = 0.5
            etr = 0.25

            [scaling.geo_ranges]
            one_day = 0.2

            [server]
            port = 9090
        "#;
        let config: DashboardConfig = toml_str.parse().unwrap();
        assert_eq!(config.scaling.activity.get(FilterSegment::VerifiableDocs), 0.5);
        assert_eq!(config.scaling.geo_ranges.one_day, 0.2);
        assert_eq!(config.scaling.geo_ranges.five_days, 0.3);
        assert_eq!(config.scaling.integrations, default_integrations());
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_incomplete_segment_table_rejected() {
        let toml_str = r#"
            [scaling.versions]
            etr = 0.1
        "#;
        let err = toml_str.parse::<DashboardConfig>().unwrap_err();
        assert!(matches!(err, MetricsError::Configuration(_)));
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let toml_str = r#"
            [scaling.geo]
            all = 1.0
            verifiable_docs = -0.7
            etr = 0.3
        "#;
        let err = toml_str.parse::<DashboardConfig>().unwrap_err();
        assert!(err.to_string().contains("scaling.geo.verifiable-docs"));
    }

    #[test]
    fn test_segment_above_all_rejected() {
        let toml_str = r#"
            [scaling.activity]
            all = 1.0
            verifiable_docs = 1.5
            etr = 0.3
        "#;
        let err = toml_str.parse::<DashboardConfig>().unwrap_err();
        assert!(matches!(err, MetricsError::Configuration(_)));
        assert!(err.to_string().contains("scaling.activity.verifiable-docs"));
    }

    #[test]
    fn test_segment_equal_to_all_accepted() {
        let mut scaling = ScalingConfig::default();
        scaling.integrations = SegmentMultipliers::new(0.5, 0.5, 0.5);
        assert!(scaling.validate().is_ok());
    }

    #[test]
    fn test_from_file_missing() {
        let result = DashboardConfig::from_file("/nonexistent/dashboard.toml");
        assert!(matches!(result, Err(MetricsError::Configuration(_))));
    }
}
