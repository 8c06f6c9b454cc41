//! Command-line argument definitions for grid historian
//!
//! This module defines the complete CLI interface using clap derive API.
//! Domain, data-type and granularity flags are taken as raw strings and
//! parsed by the engine boundary, so unknown keys surface through the
//! same error taxonomy a dashboard request would hit.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the grid historian engine
///
/// Synthesizes historical energy-asset time series and answers analytical
/// queries over them, mirroring the contract the monitoring dashboard
/// consumes.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "grid-historian",
    version,
    about = "Synthesize and query historical energy-asset time series",
    long_about = "An in-memory engine that synthesizes plausible daily observations for \
                  wind, solar, storage and charging stations and answers ad-hoc \
                  analytical queries over them: date-range and station scoping, typed \
                  attribute filters, quality-metric summaries and paginated output."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the grid historian
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Seed the in-memory store and run an analytical query (main command)
    Query(QueryArgs),
    /// Report on the built-in station catalog
    Stations(StationsArgs),
    /// Generate a one-off sample series without the store
    Generate(GenerateArgs),
}

/// Output formats for exported query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV with UTF-8 BOM and localized status column
    Csv,
    /// Pretty-printed JSON with query context and quality summary
    Json,
}

/// Output formats for the stations report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text report
    Text,
    /// JSON document
    Json,
    /// CSV listing
    Csv,
}

/// Arguments for the query command
#[derive(Debug, Clone, Parser)]
pub struct QueryArgs {
    /// Asset domain to query (wind, solar, storage, charging)
    #[arg(
        short = 'D',
        long = "domain",
        value_name = "DOMAIN",
        default_value = "wind",
        help = "Asset domain to query"
    )]
    pub domain: String,

    /// Measurement series to query (generation, price, load, charging)
    #[arg(
        short = 't',
        long = "data-type",
        value_name = "TYPE",
        default_value = "generation",
        help = "Measurement series to query"
    )]
    pub data_type: String,

    /// First day of the query window (YYYY-MM-DD, inclusive)
    #[arg(
        short = 's',
        long = "start",
        value_name = "DATE",
        help = "First day of the query window (inclusive)"
    )]
    pub start_date: String,

    /// Last day of the query window (YYYY-MM-DD, inclusive)
    #[arg(
        short = 'e',
        long = "end",
        value_name = "DATE",
        help = "Last day of the query window (inclusive)"
    )]
    pub end_date: String,

    /// Restrict the query to one station id (e.g. wind1)
    #[arg(long = "station", value_name = "ID", help = "Restrict to one station id")]
    pub station: Option<String>,

    /// Temporal granularity (5min, 15min, hour, day, month)
    ///
    /// Currently an identity passthrough kept for contract compatibility;
    /// rows are synthesized daily.
    #[arg(
        short = 'g',
        long = "granularity",
        value_name = "GRAN",
        help = "Temporal granularity (currently passthrough)"
    )]
    pub granularity: Option<String>,

    /// Filter field label (e.g. 发电量)
    ///
    /// The filter applies only when field, operator and value are all
    /// present; a partial filter is ignored.
    #[arg(long = "filter-field", value_name = "FIELD", help = "Attribute filter field label")]
    pub filter_field: Option<String>,

    /// Filter operator (=, >, <, >=, <=, between for numeric fields)
    #[arg(
        long = "filter-operator",
        value_name = "OP",
        help = "Attribute filter operator"
    )]
    pub filter_operator: Option<String>,

    /// Filter operand; between expects "min,max"
    #[arg(
        long = "filter-value",
        value_name = "VALUE",
        help = "Attribute filter operand"
    )]
    pub filter_value: Option<String>,

    /// Page number of the result table to display (1-based, clamped)
    #[arg(
        short = 'p',
        long = "page",
        value_name = "N",
        default_value_t = 1,
        help = "Result table page to display"
    )]
    pub page: usize,

    /// Rows per result table page
    #[arg(
        long = "page-size",
        value_name = "N",
        help = "Rows per result table page (default 10)"
    )]
    pub page_size: Option<usize>,

    /// RNG seed for the demo store (same seed, same data)
    #[arg(long = "seed", value_name = "SEED", help = "RNG seed for the demo store")]
    pub seed: Option<u64>,

    /// Write the full result set to a file instead of only the table page
    #[arg(
        short = 'o',
        long = "export",
        value_name = "PATH",
        help = "Export the full result set to a file"
    )]
    pub export: Option<PathBuf>,

    /// Export file format
    #[arg(
        long = "format",
        value_enum,
        default_value = "csv",
        help = "Export file format"
    )]
    pub format: ExportFormat,

    /// Include per-row quality marks (A/M/E/U) in CSV exports
    #[arg(
        long = "quality-marks",
        help = "Include per-row quality marks in CSV exports"
    )]
    pub quality_marks: bool,

    /// Date rendering in CSV exports (yyyy-MM-dd, yyyy/MM/dd, dd/MM/yyyy)
    #[arg(
        long = "date-format",
        value_name = "FMT",
        help = "Date rendering in CSV exports"
    )]
    pub date_format: Option<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the stations command (catalog reports)
#[derive(Debug, Clone, Parser)]
pub struct StationsArgs {
    /// Restrict the report to one domain (wind, solar, storage, charging)
    #[arg(
        short = 'D',
        long = "domain",
        value_name = "DOMAIN",
        help = "Restrict the report to one domain"
    )]
    pub domain: Option<String>,

    /// Report output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Report output format"
    )]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "PATH",
        help = "Write the report to a file"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the generate command (one-off series synthesis)
#[derive(Debug, Clone, Parser)]
pub struct GenerateArgs {
    /// First day of the series (YYYY-MM-DD, inclusive)
    #[arg(short = 's', long = "start", value_name = "DATE", help = "First day of the series")]
    pub start_date: String,

    /// Last day of the series (YYYY-MM-DD, inclusive)
    #[arg(short = 'e', long = "end", value_name = "DATE", help = "Last day of the series")]
    pub end_date: String,

    /// Station id stamped on every sample
    #[arg(
        long = "station",
        value_name = "ID",
        default_value = "wind1",
        help = "Station id stamped on every sample"
    )]
    pub station: String,

    /// Measurement field label stamped on every sample
    #[arg(
        long = "field",
        value_name = "LABEL",
        default_value = "风电场日发电量",
        help = "Measurement field label"
    )]
    pub field: String,

    /// Unit of measure stamped on every sample
    #[arg(
        long = "unit",
        value_name = "UNIT",
        default_value = "MWh",
        help = "Unit of measure"
    )]
    pub unit: String,

    /// Lower bound of the base value range
    #[arg(
        long = "min",
        value_name = "VALUE",
        default_value_t = 1000.0,
        help = "Lower bound of the base value range"
    )]
    pub min: f64,

    /// Upper bound of the base value range
    #[arg(
        long = "max",
        value_name = "VALUE",
        default_value_t = 3000.0,
        help = "Upper bound of the base value range"
    )]
    pub max: f64,

    /// Probability in [0, 1] that a day's sample is anomalous
    #[arg(
        long = "anomaly-rate",
        value_name = "RATE",
        default_value_t = 0.05,
        help = "Probability that a day's sample is anomalous"
    )]
    pub anomaly_rate: f64,

    /// RNG seed (same seed, same series)
    #[arg(long = "seed", value_name = "SEED", help = "RNG seed for the series")]
    pub seed: Option<u64>,

    /// Write the series to a file instead of stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "PATH",
        help = "Write the series to a file"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl QueryArgs {
    /// Resolve the tracing level from verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl StationsArgs {
    /// Resolve the tracing level from verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl GenerateArgs {
    /// Resolve the tracing level from verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

/// Map verbosity flags to a tracing level name
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
