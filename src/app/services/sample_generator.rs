//! Synthetic daily time-series generation
//!
//! This module produces the plausible historical observations the engine
//! serves. Values are deterministic formulas plus bounded randomness: a
//! uniform base draw shaped by seasonal and weekend factors, a small daily
//! jitter, and an optional anomaly injection that spikes or dips the value
//! and tags the sample accordingly. The generator owns a seeded RNG so a
//! given seed always reproduces the same catalog.

use crate::app::models::{Sample, SampleStatus, round2};
use crate::constants::factors;
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// Series Specification
// =============================================================================

/// Parameters for generating one station/field series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    /// First calendar day of the series (inclusive)
    pub start_date: NaiveDate,

    /// Last calendar day of the series (inclusive)
    pub end_date: NaiveDate,

    /// Identifier of the producing station
    pub station_id: String,

    /// Measurement field label stamped on every sample
    pub field_label: String,

    /// Unit of measure stamped on every sample
    pub unit: String,

    /// Inclusive range the base value is drawn from
    pub value_range: (f64, f64),

    /// Probability in [0, 1] that a given day's sample is anomalous
    pub anomaly_rate: f64,
}

impl SeriesSpec {
    /// Validate the spec's range and anomaly rate
    pub fn validate(&self) -> Result<()> {
        let (min, max) = self.value_range;
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::data_validation(format!(
                "series '{}' has non-finite value range",
                self.field_label
            )));
        }
        if min > max {
            return Err(Error::data_validation(format!(
                "series '{}' value range is inverted ({} > {})",
                self.field_label, min, max
            )));
        }
        if !(0.0..=1.0).contains(&self.anomaly_rate) {
            return Err(Error::data_validation(format!(
                "series '{}' anomaly rate {} is outside [0, 1]",
                self.field_label, self.anomaly_rate
            )));
        }
        if self.station_id.trim().is_empty() {
            return Err(Error::data_validation("series station id cannot be empty"));
        }
        if self.field_label.trim().is_empty() {
            return Err(Error::data_validation("series field label cannot be empty"));
        }
        Ok(())
    }

    /// Number of calendar days the series covers (0 for inverted ranges)
    pub fn day_count(&self) -> i64 {
        if self.start_date > self.end_date {
            0
        } else {
            (self.end_date - self.start_date).num_days() + 1
        }
    }
}

// =============================================================================
// Generator
// =============================================================================

/// Generates daily sample series from a seeded RNG
#[derive(Debug)]
pub struct SampleGenerator {
    rng: StdRng,
}

impl SampleGenerator {
    /// Create a generator with a fixed seed (reproducible output)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate one sample per calendar day over the spec's range.
    ///
    /// An inverted range (`start_date > end_date`) yields an empty series;
    /// it is an explicitly supported input, not an error. Spec validation
    /// failures (inverted value range, anomaly rate outside [0, 1]) are
    /// reported as [`Error::DataValidation`].
    pub fn generate(&mut self, spec: &SeriesSpec) -> Result<Vec<Sample>> {
        spec.validate()?;

        if spec.start_date > spec.end_date {
            return Ok(Vec::new());
        }

        let (min, max) = spec.value_range;
        let mut samples = Vec::with_capacity(spec.day_count() as usize);
        let mut day = spec.start_date;

        loop {
            let base = if min == max {
                min
            } else {
                self.rng.gen_range(min..max)
            };

            let shaped = base
                * seasonal_factor(day.month())
                * weekend_factor(day.weekday())
                * self.rng.gen_range(factors::JITTER_MIN..factors::JITTER_MAX);
            let mut value = round2(shaped);

            let is_anomaly = spec.anomaly_rate > 0.0 && self.rng.r#gen::<f64>() < spec.anomaly_rate;
            if is_anomaly {
                let multiplier = if self.rng.gen_bool(0.5) {
                    self.rng
                        .gen_range(factors::ANOMALY_SPIKE_MIN..factors::ANOMALY_SPIKE_MAX)
                } else {
                    self.rng
                        .gen_range(factors::ANOMALY_DIP_MIN..factors::ANOMALY_DIP_MAX)
                };
                value = round2(value * multiplier);
            }

            samples.push(Sample {
                date: day,
                value,
                unit: spec.unit.clone(),
                field_label: spec.field_label.clone(),
                station_id: spec.station_id.clone(),
                status: if is_anomaly {
                    SampleStatus::Anomaly
                } else {
                    SampleStatus::Normal
                },
            });

            if day == spec.end_date {
                break;
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }

        Ok(samples)
    }
}

/// Seasonal shaping factor: winter high, summer elevated, shoulder low
fn seasonal_factor(month: u32) -> f64 {
    match month {
        12 | 1 | 2 => factors::SEASONAL_WINTER,
        6..=9 => factors::SEASONAL_SUMMER,
        _ => factors::SEASONAL_SHOULDER,
    }
}

/// Weekend shaping factor: Saturday and Sunday run lower
fn weekend_factor(weekday: Weekday) -> f64 {
    match weekday {
        Weekday::Sat | Weekday::Sun => factors::WEEKEND,
        _ => 1.0,
    }
}
