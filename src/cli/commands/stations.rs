//! Stations command: report on the built-in station catalog

use crate::app::models::Domain;
use crate::cli::args::{ReportFormat, StationsArgs};
use crate::{Result, Station, StationCatalog};
use colored::Colorize;
use std::str::FromStr;
use tracing::info;

use super::shared::{setup_logging, write_or_print};

/// Execute the stations command
pub fn run_stations(args: StationsArgs) -> Result<()> {
    setup_logging(args.get_log_level());
    info!("Starting station catalog report");

    let catalog = StationCatalog::builtin();
    let domains: Vec<Domain> = match &args.domain {
        Some(name) => vec![Domain::from_str(name)?],
        None => Domain::all().to_vec(),
    };

    let output = match args.format {
        ReportFormat::Text => text_report(&catalog, &domains),
        ReportFormat::Json => json_report(&catalog, &domains)?,
        ReportFormat::Csv => csv_report(&catalog, &domains)?,
    };

    write_or_print(&output, args.output_file.as_deref())
}

/// Human-readable catalog report
fn text_report(catalog: &StationCatalog, domains: &[Domain]) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "站点目录".bold()));
    output.push_str(&format!("共 {} 个站点\n\n", catalog.station_count()));

    for domain in domains {
        let stations = catalog.stations_in_domain(*domain);
        output.push_str(&format!(
            "{} ({} 个站点)\n",
            domain.label().bold(),
            stations.len()
        ));
        output.push_str("ID         | 名称\n");
        output.push_str("-----------|------------------------\n");
        for station in stations {
            output.push_str(&format!("{:10} | {}\n", station.id, station.name));
        }
        output.push('\n');
    }

    output
}

/// JSON catalog report
fn json_report(catalog: &StationCatalog, domains: &[Domain]) -> Result<String> {
    let stations: Vec<&Station> = domains
        .iter()
        .flat_map(|domain| catalog.stations_in_domain(*domain))
        .collect();
    let document = serde_json::json!({
        "stationCount": stations.len(),
        "stations": stations,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}

/// CSV catalog listing
fn csv_report(catalog: &StationCatalog, domains: &[Domain]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["id", "name", "domain"])?;
    for domain in domains {
        for station in catalog.stations_in_domain(*domain) {
            writer.write_record([
                station.id.as_str(),
                station.name.as_str(),
                station.domain.as_str(),
            ])?;
        }
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| crate::Error::configuration(format!("CSV buffer error: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| crate::Error::configuration(format!("CSV output was not UTF-8: {e}")))
}
