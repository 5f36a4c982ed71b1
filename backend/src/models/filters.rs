//! Closed selectors the dashboard views hold as state.

crate::define_str_enum!(
    /// Coarse business category narrowing which slice of the ecosystem a metric describes.
    FilterSegment, "filter segment" {
        All => "all",
        VerifiableDocs => "verifiable-docs",
        Etr => "etr",
    }
);

impl FilterSegment {
    /// Human-readable label shown on the global filter bar.
    pub fn label(&self) -> &'static str {
        match self {
            FilterSegment::All => "All",
            FilterSegment::VerifiableDocs => "Verifiable Docs",
            FilterSegment::Etr => "ETR",
        }
    }
}

impl Default for FilterSegment {
    fn default() -> Self {
        FilterSegment::All
    }
}

crate::define_str_enum!(
    /// Requested window for time-series queries.
    TrendRange, "trend range" {
        OneMonth => "1M",
        ThreeMonths => "3M",
        SixMonths => "6M",
        OneYear => "1Y",
        FiveYears => "5Y",
        All => "ALL",
    }
);

impl TrendRange {
    /// Number of trailing monthly buckets shown for this range.
    pub fn buckets(&self) -> usize {
        match self {
            TrendRange::OneMonth => 1,
            TrendRange::ThreeMonths => 3,
            TrendRange::SixMonths => 6,
            TrendRange::OneYear | TrendRange::FiveYears | TrendRange::All => 12,
        }
    }

    /// `1M` switches the series to one point per calendar day.
    pub fn is_daily(&self) -> bool {
        matches!(self, TrendRange::OneMonth)
    }
}

impl Default for TrendRange {
    fn default() -> Self {
        TrendRange::OneMonth
    }
}

crate::define_str_enum!(
    /// Requested window for the world map; only affects magnitude.
    GeoRange, "geo range" {
        OneDay => "1D",
        FiveDays => "5D",
        OneMonth => "1M",
        SixMonths => "6M",
        OneYear => "1Y",
    }
);

impl Default for GeoRange {
    fn default() -> Self {
        GeoRange::OneMonth
    }
}

crate::define_str_enum!(
    /// Categorical breakdown used by the distribution charts.
    Taxonomy, "taxonomy" {
        Cryptosuite => "cryptosuite",
        DidMethod => "did-method",
    }
);
