//! Version/instance table and its grouping by major version.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{DateWindow, VersionGroup, VersionRecord, VersionStatus};

use super::scale_count;

struct SeedVersion {
    version: &'static str,
    instances: u32,
    released: (i32, u32, u32),
    status: VersionStatus,
}

const fn seed(
    version: &'static str,
    instances: u32,
    released: (i32, u32, u32),
    status: VersionStatus,
) -> SeedVersion {
    SeedVersion {
        version,
        instances,
        released,
        status,
    }
}

/// Newest release first.
const SEED_VERSIONS: [SeedVersion; 8] = [
    seed("v2.4.1", 1250, (2025, 12, 1), VersionStatus::Current),
    seed("v2.4.0", 890, (2025, 10, 15), VersionStatus::Stable),
    seed("v2.3.2", 650, (2025, 8, 20), VersionStatus::Stable),
    seed("v2.3.1", 420, (2025, 6, 10), VersionStatus::Deprecated),
    seed("v2.3.0", 280, (2025, 4, 5), VersionStatus::Deprecated),
    seed("v2.2.0", 150, (2025, 1, 20), VersionStatus::Legacy),
    seed("v2.1.0", 85, (2024, 10, 1), VersionStatus::Legacy),
    seed("v2.0.0", 45, (2024, 6, 15), VersionStatus::Legacy),
];

fn seed_records() -> impl Iterator<Item = VersionRecord> {
    SEED_VERSIONS.iter().filter_map(|seed| {
        let (year, month, day) = seed.released;
        let Some(release_date) = NaiveDate::from_ymd_opt(year, month, day) else {
            log::warn!("Skipping seed version {} with invalid release date", seed.version);
            return None;
        };
        Some(VersionRecord {
            version: seed.version.to_string(),
            instances: seed.instances as u64,
            release_date,
            status: seed.status,
        })
    })
}

/// Compute the version table in seed order.
///
/// The date window is applied before scaling `instances`.
pub fn compute_version_table(multiplier: f64, window: Option<&DateWindow>) -> Vec<VersionRecord> {
    log::debug!("Computing version table (x{}, window {:?})", multiplier, window);

    seed_records()
        .filter(|record| window.map_or(true, |w| w.contains(record.release_date)))
        .map(|record| VersionRecord {
            instances: scale_count(record.instances as f64, multiplier),
            ..record
        })
        .collect()
}

/// Partition records by their leading `vMAJOR` token.
///
/// Group keys sort descending as strings, so `v9` precedes `v10`. Records
/// keep their incoming order inside each group.
pub fn group_by_major(records: &[VersionRecord]) -> Vec<VersionGroup> {
    let mut groups: BTreeMap<&str, Vec<VersionRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.major_key()).or_default().push(record.clone());
    }

    groups
        .into_iter()
        .rev()
        .map(|(key, records)| VersionGroup {
            key: key.to_string(),
            records,
        })
        .collect()
}

/// The release flagged as latest: the first row of the rendered table.
pub fn latest_version(records: &[VersionRecord]) -> Option<&VersionRecord> {
    records.first()
}
