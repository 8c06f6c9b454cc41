//! Immutable in-memory sample store
//!
//! This module holds every generated series, keyed by
//! `(domain, data type)`. The store is populated once at startup from
//! generator output and read-only afterwards: concurrent readers are
//! always safe, and a reload means building a fresh store and swapping
//! the `Arc` that owns it.

use crate::app::models::{DataType, Domain, Sample};
use crate::app::services::sample_generator::{SampleGenerator, SeriesSpec};
use crate::app::services::station_catalog::StationCatalog;
use crate::{Result, config::EngineConfig};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, info};

/// Per-domain series templates: data type, field label, unit, value range
/// and anomaly rate for every series generated per station.
///
/// Mirrors the demo dataset of the dashboard. Note that no template
/// produces the `charging` *data type*: those store keys stay empty and
/// queries against them return empty row sets.
fn series_templates(domain: Domain) -> &'static [(DataType, &'static str, &'static str, (f64, f64), f64)] {
    match domain {
        Domain::Wind => &[
            (DataType::Generation, "风电场日发电量", "MWh", (1000.0, 3000.0), 0.10),
            (DataType::Price, "风电交易价格", "元/MWh", (300.0, 600.0), 0.05),
            (DataType::Load, "风电负荷", "MW", (800.0, 2500.0), 0.08),
        ],
        Domain::Solar => &[
            (DataType::Generation, "光伏电站日发电量", "MWh", (500.0, 2000.0), 0.05),
            (DataType::Price, "光伏交易价格", "元/MWh", (280.0, 550.0), 0.05),
            (DataType::Load, "光伏负荷", "MW", (400.0, 1800.0), 0.08),
        ],
        Domain::Storage => &[
            (DataType::Generation, "储能放电量", "MWh", (200.0, 1000.0), 0.05),
            (DataType::Price, "储能价格", "元/MWh", (350.0, 800.0), 0.10),
            (DataType::Load, "储能负荷", "MW", (100.0, 800.0), 0.08),
        ],
        Domain::Charging => &[
            (DataType::Generation, "充电量", "kWh", (2000.0, 5000.0), 0.08),
            (DataType::Price, "充电价格", "元/kWh", (0.8, 2.5), 0.05),
            (DataType::Load, "充电负荷", "kW", (1500.0, 4000.0), 0.08),
        ],
    }
}

/// Immutable collection of generated samples keyed by (domain, data type)
#[derive(Debug, Default)]
pub struct DataStore {
    series: HashMap<(Domain, DataType), Vec<Sample>>,
}

impl DataStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate a store over a date window using the built-in series
    /// templates: every station in the catalog gets one generation, one
    /// price and one load series.
    pub fn seeded(
        catalog: &StationCatalog,
        generator: &mut SampleGenerator,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self> {
        let mut store = Self::new();

        for domain in Domain::all() {
            for station in catalog.stations_in_domain(domain) {
                for (data_type, field_label, unit, value_range, anomaly_rate) in
                    series_templates(domain)
                {
                    let spec = SeriesSpec {
                        start_date,
                        end_date,
                        station_id: station.id.clone(),
                        field_label: (*field_label).to_string(),
                        unit: (*unit).to_string(),
                        value_range: *value_range,
                        anomaly_rate: *anomaly_rate,
                    };
                    let samples = generator.generate(&spec)?;
                    debug!(
                        station = %station.id,
                        field = %field_label,
                        rows = samples.len(),
                        "generated series"
                    );
                    store.extend_series(domain, *data_type, samples);
                }
            }
        }

        info!(
            series = store.series.len(),
            rows = store.total_rows(),
            "data store populated"
        );
        Ok(store)
    }

    /// Populate a store using the configured seed and seeding window
    pub fn seeded_with_config(
        catalog: &StationCatalog,
        config: &EngineConfig,
        anchor: NaiveDate,
    ) -> Result<Self> {
        config.validate()?;
        let (start, end) = config.seed_window(anchor)?;
        let mut generator = SampleGenerator::new(config.seed);
        Self::seeded(catalog, &mut generator, start, end)
    }

    /// Append samples to the series stored under `(domain, data_type)`
    pub fn extend_series(&mut self, domain: Domain, data_type: DataType, samples: Vec<Sample>) {
        if samples.is_empty() {
            return;
        }
        self.series
            .entry((domain, data_type))
            .or_default()
            .extend(samples);
    }

    /// Rows stored under `(domain, data_type)`, generation order preserved.
    ///
    /// A missing key reads as an empty slice, never an error.
    pub fn rows(&self, domain: Domain, data_type: DataType) -> &[Sample] {
        self.series
            .get(&(domain, data_type))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of populated (domain, data type) series
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Total number of stored rows across all series
    pub fn total_rows(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    /// True when the store holds no rows at all
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> DataStore {
        let catalog = StationCatalog::builtin();
        let mut generator = SampleGenerator::new(42);
        DataStore::seeded(
            &catalog,
            &mut generator,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_seeded_store_covers_generation_price_load() {
        let store = seeded_store();
        // 4 domains x 3 data types
        assert_eq!(store.series_count(), 12);
        for domain in Domain::all() {
            assert!(!store.rows(domain, DataType::Generation).is_empty());
            assert!(!store.rows(domain, DataType::Price).is_empty());
            assert!(!store.rows(domain, DataType::Load).is_empty());
        }
    }

    #[test]
    fn test_charging_data_type_is_never_populated() {
        let store = seeded_store();
        for domain in Domain::all() {
            assert!(store.rows(domain, DataType::Charging).is_empty());
        }
    }

    #[test]
    fn test_row_counts_match_station_and_day_counts() {
        let store = seeded_store();
        // 3 wind stations x 31 days
        assert_eq!(store.rows(Domain::Wind, DataType::Generation).len(), 93);
        // 2 storage stations x 31 days
        assert_eq!(store.rows(Domain::Storage, DataType::Load).len(), 62);
    }

    #[test]
    fn test_rows_belong_to_their_domain() {
        let store = seeded_store();
        let catalog = StationCatalog::builtin();
        for sample in store.rows(Domain::Solar, DataType::Price) {
            let station = catalog.get_station(&sample.station_id).unwrap();
            assert_eq!(station.domain, Domain::Solar);
            assert_eq!(sample.unit, "元/MWh");
        }
    }

    #[test]
    fn test_missing_key_reads_empty() {
        let store = DataStore::new();
        assert!(store.rows(Domain::Wind, DataType::Generation).is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_same_seed_reproduces_store() {
        let catalog = StationCatalog::builtin();
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let a = DataStore::seeded(&catalog, &mut SampleGenerator::new(7), start, end).unwrap();
        let b = DataStore::seeded(&catalog, &mut SampleGenerator::new(7), start, end).unwrap();
        assert_eq!(
            a.rows(Domain::Wind, DataType::Generation),
            b.rows(Domain::Wind, DataType::Generation)
        );
    }
}
