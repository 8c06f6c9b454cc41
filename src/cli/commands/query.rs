//! Query command: seed the store and run an analytical query
//!
//! Builds the built-in catalog and schema, populates the in-memory store
//! over a window anchored on the query's start date (so any queried range
//! has data, the way the dashboard seeds around "today"), runs the query
//! and renders a paginated table plus a quality summary. The full result
//! set can be exported as CSV or JSON.

use crate::app::adapters::export::{CsvExportOptions, ExportDateFormat, export_csv, export_json};
use crate::app::services::query_engine::{
    FilterPredicate, QueryEngine, QueryResult, RawQueryParams, paginate, sort_rows_desc,
};
use crate::cli::args::{ExportFormat, QueryArgs};
use crate::config::EngineConfig;
use crate::{DataStore, Error, FieldSchemaRegistry, Result, Sample, StationCatalog};
use colored::Colorize;
use std::fs::File;
use std::io::BufWriter;
use std::sync::Arc;
use tracing::info;

use super::shared::setup_logging;

/// Execute the query command
pub fn run_query(args: QueryArgs) -> Result<()> {
    setup_logging(args.get_log_level());

    let raw = build_raw_params(&args);
    let params = raw.parse()?;

    let mut config = EngineConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(page_size) = args.page_size {
        config = config.with_page_size(page_size);
    }
    config.validate()?;

    let catalog = StationCatalog::builtin();
    let store = DataStore::seeded_with_config(&catalog, &config, params.start_date)?;
    let engine = QueryEngine::new(Arc::new(store), Arc::new(FieldSchemaRegistry::builtin()));

    info!(
        domain = %params.domain,
        data_type = %params.data_type,
        "running query"
    );
    let result = engine.query(&params);

    let station_label = params
        .station_id
        .as_deref()
        .map(|id| catalog.station_name(id).to_string())
        .unwrap_or_else(|| "全部".to_string());

    if !args.quiet {
        print_summary(&result, &params, &station_label);
        print_table(&result, args.page, config.page_size);
    }

    if let Some(path) = &args.export {
        let file = File::create(path)
            .map_err(|e| Error::io(format!("failed to create {}", path.display()), e))?;
        let mut writer = BufWriter::new(file);
        match args.format {
            ExportFormat::Csv => {
                let options = CsvExportOptions {
                    include_quality_marks: args.quality_marks,
                    date_format: match &args.date_format {
                        Some(format) => format.parse()?,
                        None => ExportDateFormat::default(),
                    },
                    ..Default::default()
                };
                export_csv(&mut writer, &result, &params, &station_label, &options)?;
            }
            ExportFormat::Json => {
                export_json(&mut writer, &result, &params, &station_label)?;
            }
        }
        if !args.quiet {
            println!("\n已导出 {} 行 -> {}", result.total, path.display());
        }
    }

    Ok(())
}

/// Assemble the string-keyed boundary parameters from CLI flags
fn build_raw_params(args: &QueryArgs) -> RawQueryParams {
    let predicate = match (&args.filter_field, &args.filter_operator, &args.filter_value) {
        (None, None, None) => None,
        (field, operator, operand) => Some(FilterPredicate::new(
            field.clone().unwrap_or_default(),
            operator.clone().unwrap_or_default(),
            operand.clone().unwrap_or_default(),
        )),
    };

    RawQueryParams {
        domain: args.domain.clone(),
        data_type: args.data_type.clone(),
        start_date: args.start_date.clone(),
        end_date: args.end_date.clone(),
        station_id: args.station.clone(),
        granularity: args.granularity.clone(),
        predicate,
    }
}

/// Print the result summary block
fn print_summary(
    result: &QueryResult,
    params: &crate::app::services::query_engine::QueryParams,
    station_label: &str,
) {
    println!(
        "{}",
        format!("{} - {}", params.domain.label(), params.data_type.label()).bold()
    );
    println!(
        "时间范围: {} ~ {}  站点: {}  粒度: {}",
        params.start_date,
        params.end_date,
        station_label,
        params.granularity.label()
    );
    println!(
        "记录数: {}  时间跨度: {} 天",
        result.total, result.time_span_days
    );

    let quality = &result.quality;
    let anomaly = format!("{:.2}%", quality.anomaly_after);
    println!(
        "数据质量: 缺失 {:.2}%  异常 {}  重复 {:.2}%  一致性 {:.2}%",
        quality.missing_after,
        if quality.anomaly_after > 0.0 {
            anomaly.red().to_string()
        } else {
            anomaly
        },
        quality.duplicate_after,
        quality.consistency_after
    );

    if result.is_empty() {
        println!("{}", "查询结果为空".yellow());
    }
}

/// Print one page of the result table, newest rows first
fn print_table(result: &QueryResult, page: usize, page_size: usize) {
    if result.is_empty() {
        return;
    }

    let mut rows: Vec<Sample> = result.rows.clone();
    sort_rows_desc(&mut rows);
    let page = paginate(&rows, page_size, page);

    println!();
    println!("日期       | 站点       | 数值        | 单位    | 状态");
    println!("-----------|------------|-------------|---------|------");
    for sample in page.rows {
        println!(
            "{} | {:10} | {:11.2} | {:7} | {}",
            sample.date, sample.station_id, sample.value, sample.unit, sample.status.label()
        );
    }
    println!(
        "第 {}/{} 页 (第 {}-{} 行, 共 {} 行)",
        page.page,
        page.total_pages.max(1),
        page.start_index + 1,
        page.end_index,
        page.total_rows
    );
}
