//! Export adapters for query results
//!
//! Serializes a [`QueryResult`] for downstream tooling: CSV in the shape
//! the dashboard's spreadsheet users expect (UTF-8 BOM, localized status
//! column, optional metadata block and per-row quality marks) and JSON
//! carrying the query context plus the quality summary. Adapters consume
//! only the stable `Sample` wire contract; they never reach into engine
//! internals.

use crate::app::models::{Sample, SampleStatus};
use crate::app::services::query_engine::{QueryParams, QueryResult};
use crate::constants::{DEFAULT_EXPORT_PRECISION, quality_marks};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde_json::json;
use std::io::Write;
use std::str::FromStr;
use tracing::info;

// =============================================================================
// Options
// =============================================================================

/// Date rendering styles offered by the export dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportDateFormat {
    /// `2024-01-31`
    #[default]
    IsoDash,
    /// `2024/01/31`
    IsoSlash,
    /// `31/01/2024`
    DayFirst,
}

impl ExportDateFormat {
    /// Render one date in this format
    pub fn render(self, date: NaiveDate) -> String {
        match self {
            ExportDateFormat::IsoDash => date.format("%Y-%m-%d").to_string(),
            ExportDateFormat::IsoSlash => date.format("%Y/%m/%d").to_string(),
            ExportDateFormat::DayFirst => date.format("%d/%m/%Y").to_string(),
        }
    }
}

impl FromStr for ExportDateFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "yyyy-MM-dd" => Ok(ExportDateFormat::IsoDash),
            "yyyy/MM/dd" => Ok(ExportDateFormat::IsoSlash),
            "dd/MM/yyyy" => Ok(ExportDateFormat::DayFirst),
            other => Err(Error::configuration(format!(
                "unknown export date format '{other}'"
            ))),
        }
    }
}

/// CSV export options
#[derive(Debug, Clone)]
pub struct CsvExportOptions {
    /// Prepend a metadata block (scene, data type, range, station)
    pub include_metadata: bool,

    /// Append a per-row quality-mark column (A/M/E/U)
    pub include_quality_marks: bool,

    /// Date rendering style
    pub date_format: ExportDateFormat,

    /// Decimal places on exported values
    pub precision: usize,
}

impl Default for CsvExportOptions {
    fn default() -> Self {
        Self {
            include_metadata: true,
            include_quality_marks: false,
            date_format: ExportDateFormat::default(),
            precision: DEFAULT_EXPORT_PRECISION,
        }
    }
}

// =============================================================================
// CSV
// =============================================================================

/// Write a query result as CSV.
///
/// Starts with a UTF-8 BOM so spreadsheet applications pick up the
/// encoding, optionally followed by a metadata block, then the header
/// `时间,数值,单位,状态` and one row per sample with the localized status.
pub fn export_csv<W: Write>(
    writer: &mut W,
    result: &QueryResult,
    params: &QueryParams,
    station_label: &str,
    options: &CsvExportOptions,
) -> Result<()> {
    writer
        .write_all("\u{feff}".as_bytes())
        .map_err(|e| Error::io("failed to write CSV byte-order mark", e))?;

    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    if options.include_metadata {
        for (key, value) in metadata_rows(params, station_label) {
            csv_writer.write_record([key.as_str(), value.as_str()])?;
        }
        csv_writer.write_record(["", ""])?;
    }

    let mut header = vec!["时间", "数值", "单位", "状态"];
    if options.include_quality_marks {
        header.push("质量标记");
    }
    csv_writer.write_record(&header)?;

    for sample in &result.rows {
        let mut record = vec![
            options.date_format.render(sample.date),
            format!("{:.*}", options.precision, sample.value),
            sample.unit.clone(),
            sample.status.label().to_string(),
        ];
        if options.include_quality_marks {
            record.push(quality_mark(sample).to_string());
        }
        csv_writer.write_record(&record)?;
    }

    csv_writer
        .flush()
        .map_err(|e| Error::io("failed to flush CSV output", e))?;
    info!(rows = result.total, "CSV export complete");
    Ok(())
}

/// Metadata block rows for the CSV header area
fn metadata_rows(params: &QueryParams, station_label: &str) -> Vec<(String, String)> {
    vec![
        ("场景".to_string(), params.domain.label().to_string()),
        ("数据类型".to_string(), params.data_type.label().to_string()),
        (
            "时间范围".to_string(),
            format!("{} ~ {}", params.start_date, params.end_date),
        ),
        (
            "时间粒度".to_string(),
            params.granularity.label().to_string(),
        ),
        ("站点".to_string(), station_label.to_string()),
    ]
}

/// Per-row quality mark: A normal, E anomaly, M missing, U unknown
fn quality_mark(sample: &Sample) -> &'static str {
    match sample.status {
        SampleStatus::Normal => quality_marks::NORMAL,
        _ if !sample.value.is_finite() => quality_marks::MISSING,
        SampleStatus::Anomaly => quality_marks::ANOMALY,
    }
}

// =============================================================================
// JSON
// =============================================================================

/// Write a query result as pretty-printed JSON with query context and the
/// quality summary alongside the rows.
pub fn export_json<W: Write>(
    writer: &mut W,
    result: &QueryResult,
    params: &QueryParams,
    station_label: &str,
) -> Result<()> {
    let document = json!({
        "query": {
            "scene": params.domain.as_str(),
            "sceneLabel": params.domain.label(),
            "dataType": params.data_type.as_str(),
            "dataTypeLabel": params.data_type.label(),
            "startDate": params.start_date.to_string(),
            "endDate": params.end_date.to_string(),
            "granularity": params.granularity.as_str(),
            "station": station_label,
        },
        "total": result.total,
        "timeSpanDays": result.time_span_days,
        "quality": result.quality,
        "data": result.rows,
    });

    serde_json::to_writer_pretty(&mut *writer, &document)
        .map_err(|e| Error::json_export("failed to serialize query result", e))?;
    writer
        .write_all(b"\n")
        .map_err(|e| Error::io("failed to finish JSON output", e))?;
    info!(rows = result.total, "JSON export complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{DataType, Domain, Granularity};
    use crate::app::services::query_engine::QualityMetrics;

    fn sample(date: &str, value: f64, status: SampleStatus) -> Sample {
        Sample {
            date: date.parse().unwrap(),
            value,
            unit: "MWh".to_string(),
            field_label: "风电场日发电量".to_string(),
            station_id: "wind1".to_string(),
            status,
        }
    }

    fn test_result() -> (QueryResult, QueryParams) {
        let rows = vec![
            sample("2024-01-01", 2000.0, SampleStatus::Normal),
            sample("2024-01-02", 4100.55, SampleStatus::Anomaly),
        ];
        let quality = QualityMetrics::calculate(&rows);
        let total = rows.len();
        let result = QueryResult {
            rows,
            quality,
            total,
            time_span_days: 1,
        };
        let params = QueryParams {
            domain: Domain::Wind,
            data_type: DataType::Generation,
            start_date: "2024-01-01".parse().unwrap(),
            end_date: "2024-01-02".parse().unwrap(),
            station_id: Some("wind1".to_string()),
            granularity: Granularity::Day,
            predicate: None,
        };
        (result, params)
    }

    #[test]
    fn test_csv_starts_with_bom_and_header() {
        let (result, params) = test_result();
        let mut buffer = Vec::new();
        let options = CsvExportOptions {
            include_metadata: false,
            ..Default::default()
        };
        export_csv(&mut buffer, &result, &params, "张北风电场", &options).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with('\u{feff}'));
        let mut lines = text.trim_start_matches('\u{feff}').lines();
        assert_eq!(lines.next().unwrap(), "时间,数值,单位,状态");
        assert_eq!(lines.next().unwrap(), "2024-01-01,2000.00,MWh,正常");
        assert_eq!(lines.next().unwrap(), "2024-01-02,4100.55,MWh,异常");
    }

    #[test]
    fn test_csv_metadata_block() {
        let (result, params) = test_result();
        let mut buffer = Vec::new();
        export_csv(
            &mut buffer,
            &result,
            &params,
            "张北风电场",
            &CsvExportOptions::default(),
        )
        .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("场景,风电场景"));
        assert!(text.contains("数据类型,发电记录"));
        assert!(text.contains("时间范围,2024-01-01 ~ 2024-01-02"));
        assert!(text.contains("站点,张北风电场"));
    }

    #[test]
    fn test_csv_quality_marks() {
        let (result, params) = test_result();
        let mut buffer = Vec::new();
        let options = CsvExportOptions {
            include_metadata: false,
            include_quality_marks: true,
            ..Default::default()
        };
        export_csv(&mut buffer, &result, &params, "全部", &options).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("质量标记"));
        assert!(text.contains("2024-01-01,2000.00,MWh,正常,A"));
        assert!(text.contains("2024-01-02,4100.55,MWh,异常,E"));
    }

    #[test]
    fn test_csv_date_formats() {
        let date: NaiveDate = "2024-01-31".parse().unwrap();
        assert_eq!(ExportDateFormat::IsoDash.render(date), "2024-01-31");
        assert_eq!(ExportDateFormat::IsoSlash.render(date), "2024/01/31");
        assert_eq!(ExportDateFormat::DayFirst.render(date), "31/01/2024");
        assert!("yyyy-MM-dd".parse::<ExportDateFormat>().is_ok());
        assert!("MM-dd-yyyy".parse::<ExportDateFormat>().is_err());
    }

    #[test]
    fn test_json_document_shape() {
        let (result, params) = test_result();
        let mut buffer = Vec::new();
        export_json(&mut buffer, &result, &params, "张北风电场").unwrap();

        let document: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(document["query"]["scene"], "wind");
        assert_eq!(document["query"]["dataTypeLabel"], "发电记录");
        assert_eq!(document["query"]["station"], "张北风电场");
        assert_eq!(document["total"], 2);
        assert_eq!(document["data"][0]["stationId"], "wind1");
        assert_eq!(document["data"][1]["status"], "anomaly");
        assert!(document["quality"]["consistencyAfter"].is_number());
    }
}
