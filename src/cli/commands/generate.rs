//! Generate command: synthesize a one-off series without the store

use crate::app::services::sample_generator::{SampleGenerator, SeriesSpec};
use crate::cli::args::GenerateArgs;
use crate::constants::DEFAULT_RNG_SEED;
use crate::{Result, SampleStatus};
use chrono::NaiveDate;
use tracing::info;

use super::shared::{setup_logging, write_or_print};

/// Execute the generate command
pub fn run_generate(args: GenerateArgs) -> Result<()> {
    setup_logging(args.get_log_level());

    let spec = SeriesSpec {
        start_date: parse_date(&args.start_date)?,
        end_date: parse_date(&args.end_date)?,
        station_id: args.station.clone(),
        field_label: args.field.clone(),
        unit: args.unit.clone(),
        value_range: (args.min, args.max),
        anomaly_rate: args.anomaly_rate,
    };

    let mut generator = SampleGenerator::new(args.seed.unwrap_or(DEFAULT_RNG_SEED));
    let samples = generator.generate(&spec)?;

    let anomalies = samples
        .iter()
        .filter(|s| s.status == SampleStatus::Anomaly)
        .count();
    info!(
        rows = samples.len(),
        anomalies,
        station = %args.station,
        "series generated"
    );

    let output = serde_json::to_string_pretty(&samples)?;
    write_or_print(&output, args.output_file.as_deref())?;

    if !args.quiet && args.output_file.is_some() {
        println!(
            "已生成 {} 条记录 ({} 条异常) -> {}",
            samples.len(),
            anomalies,
            args.output_file.as_ref().map(|p| p.display().to_string()).unwrap_or_default()
        );
    }

    Ok(())
}

/// Parse a YYYY-MM-DD date argument
fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), crate::constants::DATE_FORMAT)
        .map_err(|e| crate::Error::date_parse(format!("invalid date '{value}'"), e))
}
