//! Activity and integrations time series.
//!
//! `1M` produces one jittered point per day for the trailing 30 days. Every
//! other range slices the trailing months off a fixed 12-month seed table,
//! so those series are fully deterministic.

use chrono::NaiveDate;

use crate::models::{day_label, trailing_days, IntegrationPoint, TimeSeriesPoint, TrendRange};
use crate::random::RandomSource;

use super::{round_half_up, scale_count};

/// Points in a daily-granularity series.
pub const DAILY_POINTS: usize = 30;

/// Uniform sampling band `[lo, lo + spread)`.
#[derive(Debug, Clone, Copy)]
pub struct JitterBand {
    pub lo: f64,
    pub spread: f64,
}

impl JitterBand {
    pub const fn new(lo: f64, spread: f64) -> Self {
        Self { lo, spread }
    }

    pub fn hi(&self) -> f64 {
        self.lo + self.spread
    }

    fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        self.lo + rng.next_f64() * self.spread
    }
}

pub const DAILY_ISSUANCE: JitterBand = JitterBand::new(120.0, 180.0);
pub const DAILY_VERIFICATION: JitterBand = JitterBand::new(80.0, 220.0);
pub const DAILY_INTEGRATIONS: JitterBand = JitterBand::new(40.0, 30.0);

/// Daily growth is `round((r - 0.3) * 20)`, never scaled.
pub const DAILY_GROWTH_MIN: i64 = -6;
pub const DAILY_GROWTH_MAX: i64 = 14;

struct MonthlyActivity {
    month: &'static str,
    issuance: u32,
    verification: u32,
}

const fn activity(month: &'static str, issuance: u32, verification: u32) -> MonthlyActivity {
    MonthlyActivity {
        month,
        issuance,
        verification,
    }
}

const ACTIVITY_SEED: [MonthlyActivity; 12] = [
    activity("Jan", 4000, 2400),
    activity("Feb", 3000, 1398),
    activity("Mar", 2000, 9800),
    activity("Apr", 2780, 3908),
    activity("May", 1890, 4800),
    activity("Jun", 2390, 3800),
    activity("Jul", 3490, 4300),
    activity("Aug", 4200, 5100),
    activity("Sep", 3800, 4700),
    activity("Oct", 4100, 5200),
    activity("Nov", 4500, 5800),
    activity("Dec", 5000, 6200),
];

struct MonthlyIntegrations {
    month: &'static str,
    integrations: u32,
    growth_pct: i64,
}

const fn integrations(month: &'static str, integrations: u32, growth_pct: i64) -> MonthlyIntegrations {
    MonthlyIntegrations {
        month,
        integrations,
        growth_pct,
    }
}

const INTEGRATIONS_SEED: [MonthlyIntegrations; 12] = [
    integrations("Jan", 45, 12),
    integrations("Feb", 52, 15),
    integrations("Mar", 48, -8),
    integrations("Apr", 61, 27),
    integrations("May", 55, -10),
    integrations("Jun", 67, 22),
    integrations("Jul", 72, 7),
    integrations("Aug", 78, 8),
    integrations("Sep", 85, 9),
    integrations("Oct", 92, 8),
    integrations("Nov", 98, 7),
    integrations("Dec", 105, 7),
];

/// The trailing `range.buckets()` rows, capped at the table length.
fn trailing_months<T>(seed: &[T], range: TrendRange) -> &[T] {
    let take = range.buckets().min(seed.len());
    &seed[seed.len() - take..]
}

/// Compute the issuance vs verification series.
pub fn compute_activity<R: RandomSource + ?Sized>(
    multiplier: f64,
    range: TrendRange,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<TimeSeriesPoint> {
    log::debug!("Computing activity series for range {} (x{})", range, multiplier);

    if range.is_daily() {
        return trailing_days(today, DAILY_POINTS)
            .into_iter()
            .map(|day| TimeSeriesPoint {
                label: day_label(day),
                issuance: scale_count(DAILY_ISSUANCE.sample(rng), multiplier),
                verification: scale_count(DAILY_VERIFICATION.sample(rng), multiplier),
            })
            .collect();
    }

    trailing_months(&ACTIVITY_SEED, range)
        .iter()
        .map(|row| TimeSeriesPoint {
            label: row.month.to_string(),
            issuance: scale_count(row.issuance as f64, multiplier),
            verification: scale_count(row.verification as f64, multiplier),
        })
        .collect()
}

/// Compute the active integrations series.
pub fn compute_integrations<R: RandomSource + ?Sized>(
    multiplier: f64,
    range: TrendRange,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<IntegrationPoint> {
    log::debug!("Computing integrations series for range {} (x{})", range, multiplier);

    if range.is_daily() {
        return trailing_days(today, DAILY_POINTS)
            .into_iter()
            .map(|day| IntegrationPoint {
                label: day_label(day),
                integrations: scale_count(DAILY_INTEGRATIONS.sample(rng), multiplier),
                growth_pct: round_half_up((rng.next_f64() - 0.3) * 20.0) as i64,
            })
            .collect();
    }

    trailing_months(&INTEGRATIONS_SEED, range)
        .iter()
        .map(|row| IntegrationPoint {
            label: row.month.to_string(),
            integrations: scale_count(row.integrations as f64, multiplier),
            growth_pct: row.growth_pct,
        })
        .collect()
}
