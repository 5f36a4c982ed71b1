//! Query surface consumed by the dashboard views.
//!
//! [`MetricsEngine`] binds a [`ScalingConfig`] to the service functions. It
//! holds no mutable state and can be shared freely between threads. The free
//! `generate_*` functions use the built-in scaling tables, the process-wide
//! random source and the local calendar date.

use chrono::{Local, NaiveDate};

use crate::config::ScalingConfig;
use crate::error::MetricsResult;
use crate::models::{
    DateWindow, DistributionPair, FilterSegment, GeoPoint, GeoRange, IntegrationPoint, Taxonomy,
    TimeSeriesPoint, TrendRange, VersionGroup, VersionRecord,
};
use crate::random::{RandomSource, RngSource};
use crate::services;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsEngine {
    scaling: ScalingConfig,
}

impl MetricsEngine {
    /// Create an engine over validated scaling tables.
    pub fn new(scaling: ScalingConfig) -> MetricsResult<Self> {
        scaling.validate()?;
        Ok(Self { scaling })
    }

    pub fn scaling(&self) -> &ScalingConfig {
        &self.scaling
    }

    /// Issuance vs verification over time.
    pub fn activity<R: RandomSource + ?Sized>(
        &self,
        filter: FilterSegment,
        range: TrendRange,
        today: NaiveDate,
        rng: &mut R,
    ) -> Vec<TimeSeriesPoint> {
        services::compute_activity(self.scaling.activity.get(filter), range, today, rng)
    }

    /// Active integrations over time.
    pub fn integrations<R: RandomSource + ?Sized>(
        &self,
        filter: FilterSegment,
        range: TrendRange,
        today: NaiveDate,
        rng: &mut R,
    ) -> Vec<IntegrationPoint> {
        services::compute_integrations(self.scaling.integrations.get(filter), range, today, rng)
    }

    pub fn distribution(&self, taxonomy: Taxonomy, filter: FilterSegment) -> &'static DistributionPair {
        services::compute_distribution(taxonomy, filter)
    }

    pub fn geo_activity(&self, filter: FilterSegment, range: GeoRange) -> Vec<GeoPoint> {
        services::compute_geo_activity(
            self.scaling.geo.get(filter),
            self.scaling.geo_ranges.get(range),
        )
    }

    pub fn version_table(
        &self,
        filter: FilterSegment,
        window: Option<&DateWindow>,
    ) -> Vec<VersionRecord> {
        services::compute_version_table(self.scaling.versions.get(filter), window)
    }

    /// Version table limited to releases in `[from, to]`.
    pub fn version_table_between(
        &self,
        filter: FilterSegment,
        from: NaiveDate,
        to: NaiveDate,
    ) -> MetricsResult<Vec<VersionRecord>> {
        let window = DateWindow::new(from, to)?;
        Ok(self.version_table(filter, Some(&window)))
    }

    pub fn version_groups(
        &self,
        filter: FilterSegment,
        window: Option<&DateWindow>,
    ) -> Vec<VersionGroup> {
        services::group_by_major(&self.version_table(filter, window))
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Issuance vs verification series with the default scaling tables.
pub fn generate_trend(filter: FilterSegment, range: TrendRange) -> Vec<TimeSeriesPoint> {
    MetricsEngine::default().activity(filter, range, today(), &mut RngSource::thread())
}

/// Active integrations series with the default scaling tables.
pub fn generate_integrations(filter: FilterSegment, range: TrendRange) -> Vec<IntegrationPoint> {
    MetricsEngine::default().integrations(filter, range, today(), &mut RngSource::thread())
}

pub fn generate_distribution(taxonomy: Taxonomy, filter: FilterSegment) -> &'static DistributionPair {
    services::compute_distribution(taxonomy, filter)
}

pub fn generate_geo_activity(filter: FilterSegment, range: GeoRange) -> Vec<GeoPoint> {
    MetricsEngine::default().geo_activity(filter, range)
}

pub fn generate_version_table(
    filter: FilterSegment,
    window: Option<&DateWindow>,
) -> Vec<VersionRecord> {
    MetricsEngine::default().version_table(filter, window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SegmentMultipliers;
    use crate::error::MetricsError;
    use crate::random::SequenceSource;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_engine_rejects_invalid_scaling() {
        let mut scaling = ScalingConfig::default();
        scaling.activity = SegmentMultipliers::new(1.0, f64::NAN, 0.3);
        assert!(matches!(
            MetricsEngine::new(scaling),
            Err(MetricsError::Configuration(_))
        ));
    }

    #[test]
    fn test_engine_rejects_segment_above_all() {
        let mut scaling = ScalingConfig::default();
        scaling.activity = SegmentMultipliers::new(1.0, 1.5, 0.3);
        assert!(matches!(
            MetricsEngine::new(scaling),
            Err(MetricsError::Configuration(_))
        ));
    }

    #[test]
    fn test_engine_uses_configured_multipliers() {
        let mut scaling = ScalingConfig::default();
        scaling.versions = SegmentMultipliers::new(1.0, 0.5, 0.25);
        let engine = MetricsEngine::new(scaling).unwrap();

        let table = engine.version_table(FilterSegment::Etr, None);
        assert_eq!(table[0].instances, 313); // 1250 * 0.25 = 312.5
    }

    #[test]
    fn test_activity_uses_activity_table() {
        let engine = MetricsEngine::default();
        let mut rng = SequenceSource::constant(0.5);
        let series = engine.activity(
            FilterSegment::VerifiableDocs,
            TrendRange::OneYear,
            date(2026, 1, 1),
            &mut rng,
        );
        assert_eq!(series[0].issuance, 2800);
    }

    #[test]
    fn test_integrations_uses_integrations_table() {
        let engine = MetricsEngine::default();
        let mut rng = SequenceSource::constant(0.5);
        let series = engine.integrations(
            FilterSegment::VerifiableDocs,
            TrendRange::OneYear,
            date(2026, 1, 1),
            &mut rng,
        );
        assert_eq!(series[0].integrations, 27);
    }

    #[test]
    fn test_version_table_between_validates() {
        let engine = MetricsEngine::default();
        let err = engine
            .version_table_between(FilterSegment::All, date(2025, 12, 31), date(2025, 8, 1))
            .unwrap_err();
        assert!(matches!(err, MetricsError::InvalidDateWindow { .. }));

        let table = engine
            .version_table_between(FilterSegment::All, date(2025, 8, 1), date(2025, 12, 31))
            .unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_version_groups() {
        let groups = MetricsEngine::default()
            .version_groups(FilterSegment::All, None);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "v2");
    }

    #[test]
    fn test_free_functions_shape() {
        assert_eq!(generate_trend(FilterSegment::All, TrendRange::OneMonth).len(), 30);
        assert_eq!(generate_integrations(FilterSegment::Etr, TrendRange::ThreeMonths).len(), 3);
        assert_eq!(generate_geo_activity(FilterSegment::All, GeoRange::OneDay)[0].issuance, 120);
        assert_eq!(generate_version_table(FilterSegment::All, None).len(), 8);
        assert_eq!(
            generate_distribution(Taxonomy::Cryptosuite, FilterSegment::Etr).issuance[0].value,
            60
        );
    }
}
