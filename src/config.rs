//! Configuration management and validation.
//!
//! Provides the engine configuration: RNG seeding for reproducible
//! catalogs, the seeding window for the demo data store, and display
//! defaults for paginated output.

use crate::constants::{
    DEFAULT_PAGE_SIZE, DEFAULT_RNG_SEED, DEFAULT_SEED_YEARS_BACK, DEFAULT_SEED_YEARS_FORWARD,
};
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Global configuration for the historian engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// RNG seed used when populating the demo data store
    pub seed: u64,

    /// Whole calendar years of history to generate before the anchor year
    pub seed_years_back: i32,

    /// Whole calendar years of data to generate after the anchor year
    pub seed_years_forward: i32,

    /// Default page size for tabular result display
    pub page_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_RNG_SEED,
            seed_years_back: DEFAULT_SEED_YEARS_BACK,
            seed_years_forward: DEFAULT_SEED_YEARS_FORWARD,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl EngineConfig {
    /// Create configuration with a custom RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create configuration with a custom seeding window
    pub fn with_seed_window(mut self, years_back: i32, years_forward: i32) -> Self {
        self.seed_years_back = years_back;
        self.seed_years_forward = years_forward;
        self
    }

    /// Create configuration with a custom default page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::configuration("page size must be at least 1"));
        }
        if self.seed_years_back < 0 || self.seed_years_forward < 0 {
            return Err(Error::configuration(
                "seeding window years must be non-negative",
            ));
        }
        Ok(())
    }

    /// Resolve the seeding window around an anchor date.
    ///
    /// Returns January 1 of `anchor.year - seed_years_back` through
    /// December 31 of `anchor.year + seed_years_forward`, the window the
    /// demo store is populated over.
    pub fn seed_window(&self, anchor: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
        let start_year = anchor.year() - self.seed_years_back;
        let end_year = anchor.year() + self.seed_years_forward;
        let start = NaiveDate::from_ymd_opt(start_year, 1, 1).ok_or_else(|| {
            Error::configuration(format!("invalid seeding start year {start_year}"))
        })?;
        let end = NaiveDate::from_ymd_opt(end_year, 12, 31)
            .ok_or_else(|| Error::configuration(format!("invalid seeding end year {end_year}")))?;
        Ok((start, end))
    }
}
