//! Tests for quality-metric calculation

use super::*;
use crate::app::services::query_engine::quality::QualityMetrics;

#[test]
fn test_empty_rows_yield_clean_metrics() {
    let metrics = QualityMetrics::calculate(&[]);
    assert_eq!(metrics.missing_after, 0.0);
    assert_eq!(metrics.anomaly_after, 0.0);
    assert_eq!(metrics.duplicate_after, 0.0);
    assert_eq!(metrics.consistency_after, 100.0);
    assert_eq!(metrics.consistency_before, 100.0);
}

#[test]
fn test_anomaly_rate_counts_status() {
    let rows = vec![
        create_test_sample("wind1", "2024-01-01", 2000.0, SampleStatus::Normal),
        create_test_sample("wind1", "2024-01-02", 2100.0, SampleStatus::Anomaly),
        create_test_sample("wind1", "2024-01-03", 2200.0, SampleStatus::Normal),
        create_test_sample("wind1", "2024-01-04", 2300.0, SampleStatus::Anomaly),
    ];
    let metrics = QualityMetrics::calculate(&rows);
    assert_eq!(metrics.anomaly_after, 50.0);
}

#[test]
fn test_duplicate_rate_counts_repeated_keys() {
    let mut rows = create_daily_run("wind1", "2024-01-01", 9, 2000.0);
    // A second row for an existing (station, field, day)
    rows.push(create_test_sample(
        "wind1",
        "2024-01-05",
        2500.0,
        SampleStatus::Normal,
    ));
    let metrics = QualityMetrics::calculate(&rows);
    assert_eq!(metrics.duplicate_after, 10.0);
}

#[test]
fn test_missing_rate_counts_day_gaps() {
    // 2024-01-01..2024-01-10 with days 4 and 7 absent: span 10, present 8
    let rows: Vec<_> = create_daily_run("wind1", "2024-01-01", 10, 2000.0)
        .into_iter()
        .filter(|s| {
            let day = s.date.to_string();
            day != "2024-01-04" && day != "2024-01-07"
        })
        .collect();
    let metrics = QualityMetrics::calculate(&rows);
    assert_eq!(metrics.missing_after, 20.0);
}

#[test]
fn test_contiguous_run_has_no_missing_days() {
    let rows = create_daily_run("wind1", "2024-01-01", 31, 2000.0);
    let metrics = QualityMetrics::calculate(&rows);
    assert_eq!(metrics.missing_after, 0.0);
    assert_eq!(metrics.duplicate_after, 0.0);
    assert_eq!(metrics.anomaly_after, 0.0);
    assert_eq!(metrics.consistency_after, 100.0);
}

#[test]
fn test_calculation_is_deterministic() {
    let rows = create_daily_run("wind1", "2024-01-01", 31, 2000.0);
    let first = QualityMetrics::calculate(&rows);
    let second = QualityMetrics::calculate(&rows);
    assert_eq!(first, second);
}

#[test]
fn test_before_baselines_exceed_after_rates() {
    let mut rows = create_daily_run("wind1", "2024-01-01", 20, 2000.0);
    rows[3].status = SampleStatus::Anomaly;
    let metrics = QualityMetrics::calculate(&rows);
    assert!(metrics.missing_before > metrics.missing_after);
    assert!(metrics.anomaly_before > metrics.anomaly_after);
    assert!(metrics.duplicate_before > metrics.duplicate_after);
    assert!(metrics.consistency_before < metrics.consistency_after);
}

#[test]
fn test_before_baselines_vary_with_input() {
    let rows_a = create_daily_run("wind1", "2024-01-01", 20, 2000.0);
    let rows_b = create_daily_run("wind2", "2024-02-01", 20, 1500.0);
    let a = QualityMetrics::calculate(&rows_a);
    let b = QualityMetrics::calculate(&rows_b);
    // Different fingerprints should (with overwhelming likelihood) pick
    // different baseline offsets.
    assert_ne!(
        (a.missing_before, a.anomaly_before, a.duplicate_before),
        (b.missing_before, b.anomaly_before, b.duplicate_before)
    );
}

#[test]
fn test_consistency_never_negative() {
    // Every row anomalous and duplicated: rates sum past 100
    let mut rows = Vec::new();
    for _ in 0..3 {
        rows.push(create_test_sample(
            "wind1",
            "2024-01-01",
            5000.0,
            SampleStatus::Anomaly,
        ));
    }
    let metrics = QualityMetrics::calculate(&rows);
    assert!(metrics.consistency_after >= 0.0);
    assert!(metrics.consistency_before >= 0.0);
}

#[test]
fn test_metrics_serialize_with_wire_names() {
    let metrics = QualityMetrics::calculate(&create_daily_run("wind1", "2024-01-01", 5, 2000.0));
    let json = serde_json::to_value(metrics).unwrap();
    for key in [
        "missingBefore",
        "missingAfter",
        "anomalyBefore",
        "anomalyAfter",
        "duplicateBefore",
        "duplicateAfter",
        "consistencyBefore",
        "consistencyAfter",
    ] {
        assert!(json.get(key).is_some(), "missing wire key {key}");
    }
}
