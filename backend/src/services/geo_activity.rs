//! World map activity aggregates.

use crate::models::GeoPoint;

use super::scale_count;

struct SeedLocation {
    country: &'static str,
    coordinates: (f64, f64),
    issuance: u32,
    verification: u32,
}

const fn location(
    country: &'static str,
    lon: f64,
    lat: f64,
    issuance: u32,
    verification: u32,
) -> SeedLocation {
    SeedLocation {
        country,
        coordinates: (lon, lat),
        issuance,
        verification,
    }
}

const SEED_LOCATIONS: [SeedLocation; 10] = [
    location("USA", -95.7129, 37.0902, 1200, 800),
    location("UK", -3.4360, 55.3781, 800, 600),
    location("Germany", 10.4515, 51.1657, 600, 450),
    location("Singapore", 103.8198, 1.3521, 500, 400),
    location("Japan", 138.2529, 36.2048, 450, 350),
    location("Australia", 133.7751, -25.2744, 300, 250),
    location("Brazil", -51.9253, -14.2350, 250, 180),
    location("India", 78.9629, 20.5937, 400, 300),
    location("France", 2.2137, 46.2276, 350, 280),
    location("Canada", -106.3468, 56.1304, 280, 220),
];

/// Compute map points in seed order.
///
/// Both multipliers are applied before a single rounding step per field.
pub fn compute_geo_activity(filter_multiplier: f64, range_multiplier: f64) -> Vec<GeoPoint> {
    log::debug!(
        "Computing geo activity (filter x{}, range x{})",
        filter_multiplier,
        range_multiplier
    );

    SEED_LOCATIONS
        .iter()
        .map(|seed| GeoPoint {
            country: seed.country.to_string(),
            coordinates: seed.coordinates,
            issuance: scale_count(seed.issuance as f64 * filter_multiplier, range_multiplier),
            verification: scale_count(
                seed.verification as f64 * filter_multiplier,
                range_multiplier,
            ),
        })
        .collect()
}
