//! Tests for the query engine: filtering pipeline, predicate
//! compilation, quality metrics and pagination.

pub mod paginator_tests;
pub mod predicate_tests;
pub mod quality_tests;

// Test helper functions and fixtures
use crate::app::models::{DataType, Domain, Sample, SampleStatus};
use crate::app::services::data_store::DataStore;
use crate::app::services::field_schema::FieldSchemaRegistry;
use crate::app::services::query_engine::QueryEngine;
use chrono::NaiveDate;
use std::sync::Arc;

/// Create a sample with explicit value and status
pub fn create_test_sample(
    station_id: &str,
    date: &str,
    value: f64,
    status: SampleStatus,
) -> Sample {
    Sample {
        date: date.parse().unwrap(),
        value,
        unit: "MWh".to_string(),
        field_label: "风电场日发电量".to_string(),
        station_id: station_id.to_string(),
        status,
    }
}

/// Create a contiguous daily run of normal samples for one station
pub fn create_daily_run(station_id: &str, start: &str, days: usize, base_value: f64) -> Vec<Sample> {
    let start_date: NaiveDate = start.parse().unwrap();
    (0..days)
        .map(|offset| Sample {
            date: start_date + chrono::Days::new(offset as u64),
            value: base_value + offset as f64,
            unit: "MWh".to_string(),
            field_label: "风电场日发电量".to_string(),
            station_id: station_id.to_string(),
            status: SampleStatus::Normal,
        })
        .collect()
}

/// Build an engine over a hand-populated wind-generation store:
/// `wind1` with 31 days of January 2024 plus `wind2` with 10 days,
/// values chosen so predicate thresholds split the set predictably.
pub fn create_test_engine() -> QueryEngine {
    let mut store = DataStore::new();
    store.extend_series(
        Domain::Wind,
        DataType::Generation,
        create_daily_run("wind1", "2024-01-01", 31, 2000.0),
    );
    store.extend_series(
        Domain::Wind,
        DataType::Generation,
        create_daily_run("wind2", "2024-01-01", 10, 2990.0),
    );
    QueryEngine::new(
        Arc::new(store),
        Arc::new(FieldSchemaRegistry::builtin()),
    )
}
