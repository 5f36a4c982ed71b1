use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::error::{MetricsError, MetricsResult};

/// Inclusive calendar window. `from <= to` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> MetricsResult<Self> {
        if from > to {
            return Err(MetricsError::InvalidDateWindow { from, to });
        }
        Ok(Self { from, to })
    }

    /// Builds a window from optional bounds; both or neither must be present.
    pub fn from_bounds(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> MetricsResult<Option<Self>> {
        match (from, to) {
            (Some(from), Some(to)) => Self::new(from, to).map(Some),
            (None, None) => Ok(None),
            _ => Err(MetricsError::InvalidArgument(
                "date window requires both 'from' and 'to'".to_string(),
            )),
        }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// `M/D` label without zero padding, e.g. `3/7`.
pub fn day_label(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

/// The `count` consecutive days ending at `today`, oldest first.
pub fn trailing_days(today: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count)
        .rev()
        .map(|offset| today - Duration::days(offset as i64))
        .collect()
}
