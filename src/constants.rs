//! Application constants for grid historian
//!
//! This module contains the numeric factors of the synthesis model,
//! quality-baseline derivation ranges, and default values used throughout
//! the engine.

// =============================================================================
// Synthesis Model Factors
// =============================================================================

/// Multiplicative factors applied by the sample generator
pub mod factors {
    /// Seasonal uplift for winter months (December, January, February)
    pub const SEASONAL_WINTER: f64 = 1.2;

    /// Seasonal uplift for summer months (June through September)
    pub const SEASONAL_SUMMER: f64 = 1.1;

    /// Seasonal damping for spring and autumn months
    pub const SEASONAL_SHOULDER: f64 = 0.9;

    /// Weekend damping (Saturday and Sunday)
    pub const WEEKEND: f64 = 0.85;

    /// Daily jitter range applied on top of the seasonal/weekend factors
    pub const JITTER_MIN: f64 = 0.95;
    pub const JITTER_MAX: f64 = 1.05;

    /// Anomaly spike range (50% of anomalies inflate the value)
    pub const ANOMALY_SPIKE_MIN: f64 = 1.5;
    pub const ANOMALY_SPIKE_MAX: f64 = 2.0;

    /// Anomaly dip range (the other 50% deflate the value)
    pub const ANOMALY_DIP_MIN: f64 = 0.3;
    pub const ANOMALY_DIP_MAX: f64 = 0.6;
}

// =============================================================================
// Quality Baseline Derivation
// =============================================================================

/// Offsets used to derive the hypothetical pre-remediation ("before")
/// quality rates from the observed ("after") rates. Each offset is picked
/// deterministically from its range using a stable fingerprint of the row
/// set, so identical inputs always yield identical baselines.
pub mod quality_baseline {
    /// Additional missing-rate percentage points in the baseline
    pub const MISSING_OFFSET_MIN: f64 = 1.0;
    pub const MISSING_OFFSET_MAX: f64 = 3.5;

    /// Additional anomaly-rate percentage points in the baseline
    pub const ANOMALY_OFFSET_MIN: f64 = 0.5;
    pub const ANOMALY_OFFSET_MAX: f64 = 2.0;

    /// Additional duplicate-rate percentage points in the baseline
    pub const DUPLICATE_OFFSET_MIN: f64 = 0.2;
    pub const DUPLICATE_OFFSET_MAX: f64 = 1.0;
}

// =============================================================================
// Engine Defaults
// =============================================================================

/// Default RNG seed for reproducible demo catalogs
pub const DEFAULT_RNG_SEED: u64 = 0x5EED_CA7A_1065;

/// Default page size for tabular result display
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default seeding window: whole calendar years back/forward from today
pub const DEFAULT_SEED_YEARS_BACK: i32 = 1;
pub const DEFAULT_SEED_YEARS_FORWARD: i32 = 1;

/// Decimal places kept on exported values
pub const DEFAULT_EXPORT_PRECISION: usize = 2;

// =============================================================================
// Date Formats
// =============================================================================

/// Canonical date format for sample dates and query boundaries
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Localized status labels used by export adapters and table rendering
pub mod status_labels {
    pub const NORMAL: &str = "正常";
    pub const ANOMALY: &str = "异常";
}

/// Per-row quality marks used in CSV exports
pub mod quality_marks {
    /// Normal data point
    pub const NORMAL: &str = "A";

    /// Anomalous data point
    pub const ANOMALY: &str = "E";

    /// Missing value
    pub const MISSING: &str = "M";

    /// Unknown status
    pub const UNKNOWN: &str = "U";
}
