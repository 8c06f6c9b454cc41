//! Grid Historian Library
//!
//! A Rust library backing a historical-monitoring dashboard for energy
//! assets (wind, solar, storage, charging stations).
//!
//! This library provides tools for:
//! - Synthesizing plausible daily time series per station and measurement
//! - Indexing the generated series in an immutable in-memory store
//! - Answering ad-hoc analytical queries with date, station and typed
//!   attribute filters
//! - Summarizing result quality (missing / anomaly / duplicate rates)
//! - Paginating sorted result sets for tabular display
//! - Exporting results as CSV or JSON for downstream tooling

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod data_store;
        pub mod field_schema;
        pub mod query_engine;
        pub mod sample_generator;
        pub mod station_catalog;
    }
    pub mod adapters {
        pub mod export;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DataType, Domain, Granularity, Sample, SampleStatus, Station};
pub use app::services::data_store::DataStore;
pub use app::services::field_schema::FieldSchemaRegistry;
pub use app::services::query_engine::{QueryEngine, QueryParams, QueryResult};
pub use app::services::sample_generator::{SampleGenerator, SeriesSpec};
pub use app::services::station_catalog::StationCatalog;
pub use config::EngineConfig;

/// Result type alias for grid historian operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for query and generation operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Unknown measurement data type in a query
    #[error("Unknown data type: '{name}' (expected generation, price, load or charging)")]
    UnknownDataType { name: String },

    /// Unknown asset domain in a query
    #[error("Unknown domain: '{name}' (expected wind, solar, storage or charging)")]
    UnknownDomain { name: String },

    /// Unknown temporal granularity in a query
    #[error("Unknown granularity: '{name}' (expected 5min, 15min, hour, day or month)")]
    UnknownGranularity { name: String },

    /// Malformed filter predicate (operator, operand or bounds violation)
    #[error("Invalid filter predicate: {message}")]
    InvalidPredicate { message: String },

    /// Data validation error for catalogs, schemas and series specs
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Date parsing error at the query boundary
    #[error("Date parsing error: {message}")]
    DateParse {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// I/O operation failed (export adapters, report files)
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV export error
    #[error("CSV export error: {message}")]
    CsvExport {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {message}")]
    JsonExport {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an unknown data type error
    pub fn unknown_data_type(name: impl Into<String>) -> Self {
        Self::UnknownDataType { name: name.into() }
    }

    /// Create an unknown domain error
    pub fn unknown_domain(name: impl Into<String>) -> Self {
        Self::UnknownDomain { name: name.into() }
    }

    /// Create an unknown granularity error
    pub fn unknown_granularity(name: impl Into<String>) -> Self {
        Self::UnknownGranularity { name: name.into() }
    }

    /// Create an invalid predicate error
    pub fn invalid_predicate(message: impl Into<String>) -> Self {
        Self::InvalidPredicate {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a date parsing error with context
    pub fn date_parse(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateParse {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV export error with context
    pub fn csv_export(message: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvExport {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON serialization error with context
    pub fn json_export(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonExport {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvExport {
            message: "CSV writing failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonExport {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateParse {
            message: "Date parsing failed".to_string(),
            source: error,
        }
    }
}
