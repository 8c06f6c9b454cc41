//! Analytical query engine over the sample store
//!
//! Answers dashboard queries against the immutable [`DataStore`]: date and
//! station scoping, an optional typed attribute filter, and quality-metric
//! summarization. The engine owns nothing mutable; the store and field
//! schema are injected once at construction and shared behind `Arc`.

use crate::app::models::{DataType, Domain, Granularity, Sample};
use crate::app::services::data_store::DataStore;
use crate::app::services::field_schema::FieldSchemaRegistry;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

pub mod paginator;
pub mod predicate;
pub mod quality;

#[cfg(test)]
pub mod tests;

pub use paginator::{Page, paginate, sort_rows_desc};
pub use predicate::{CompiledPredicate, FilterPredicate};
pub use quality::QualityMetrics;

// =============================================================================
// Query Parameters
// =============================================================================

/// Typed query parameters
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    /// Asset domain to query
    pub domain: Domain,

    /// Measurement series kind to query
    pub data_type: DataType,

    /// First day of the query window (inclusive)
    pub start_date: NaiveDate,

    /// Last day of the query window (inclusive)
    pub end_date: NaiveDate,

    /// Restrict to one station when set
    pub station_id: Option<String>,

    /// Requested bucketing resolution (currently identity passthrough)
    pub granularity: Granularity,

    /// Optional attribute filter; incomplete predicates are a no-op
    pub predicate: Option<FilterPredicate>,
}

/// String-keyed query parameters as they arrive from the boundary
/// (CLI flags, JSON payloads). Parsed into [`QueryParams`] before the
/// engine runs, which is where unknown domain/data-type keys surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQueryParams {
    pub domain: String,
    pub data_type: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicate: Option<FilterPredicate>,
}

impl RawQueryParams {
    /// Parse the raw form into typed parameters.
    ///
    /// Fails with [`Error::UnknownDataType`] / [`Error::UnknownDomain`] /
    /// [`Error::UnknownGranularity`] for unrecognized keys and
    /// [`Error::DateParse`] for malformed dates.
    pub fn parse(&self) -> Result<QueryParams> {
        let domain = Domain::from_str(&self.domain)?;
        let data_type = DataType::from_str(&self.data_type)?;
        let start_date = parse_date(&self.start_date)?;
        let end_date = parse_date(&self.end_date)?;
        let granularity = match self.granularity.as_deref() {
            Some(g) if !g.trim().is_empty() => Granularity::from_str(g)?,
            _ => Granularity::default(),
        };

        Ok(QueryParams {
            domain,
            data_type,
            start_date,
            end_date,
            station_id: self
                .station_id
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            granularity,
            predicate: self.predicate.clone(),
        })
    }
}

/// Parse a `YYYY-MM-DD` date with error context
fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), crate::constants::DATE_FORMAT)
        .map_err(|e| Error::date_parse(format!("invalid date '{value}'"), e))
}

// =============================================================================
// Query Result
// =============================================================================

/// Result of one query: matching rows plus summary statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Matching rows in chronological (generation) order
    #[serde(rename = "data")]
    pub rows: Vec<Sample>,

    /// Quality summary over the matching rows
    pub quality: QualityMetrics,

    /// Number of matching rows
    pub total: usize,

    /// Whole days between the query's start and end dates
    #[serde(rename = "timeSpanDays")]
    pub time_span_days: i64,
}

impl QueryResult {
    /// An empty result over a zero-day span
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            quality: QualityMetrics::calculate(&[]),
            total: 0,
            time_span_days: 0,
        }
    }

    /// True when no rows matched — a normal terminal state, not an error
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Query engine over an injected store and field schema
#[derive(Debug, Clone)]
pub struct QueryEngine {
    store: Arc<DataStore>,
    schema: Arc<FieldSchemaRegistry>,
}

impl QueryEngine {
    /// Create an engine over a populated store and a validated schema
    pub fn new(store: Arc<DataStore>, schema: Arc<FieldSchemaRegistry>) -> Self {
        Self { store, schema }
    }

    /// The field schema registry this engine validates predicates against
    pub fn schema(&self) -> &FieldSchemaRegistry {
        &self.schema
    }

    /// Answer a typed query.
    ///
    /// An inverted date range (`start_date > end_date`) yields an explicit
    /// empty result rather than an error. A missing store key likewise
    /// reads as zero rows. Invalid predicates are fail-open: the predicate
    /// is dropped with a warning and the unfiltered row set is returned
    /// (see [`CompiledPredicate::compile`] for the strict variant).
    pub fn query(&self, params: &QueryParams) -> QueryResult {
        if params.start_date > params.end_date {
            warn!(
                start = %params.start_date,
                end = %params.end_date,
                "query start date is after end date, returning empty result"
            );
            return QueryResult::empty();
        }

        let mut rows: Vec<Sample> = self
            .store
            .rows(params.domain, params.data_type)
            .iter()
            .filter(|sample| {
                sample.date >= params.start_date && sample.date <= params.end_date
            })
            .filter(|sample| match &params.station_id {
                Some(id) => sample.station_id == *id,
                None => true,
            })
            .cloned()
            .collect();

        self.apply_predicate(&mut rows, params);
        let rows = aggregate_by_granularity(rows, params.granularity);

        let quality = QualityMetrics::calculate(&rows);
        let total = rows.len();
        QueryResult {
            rows,
            quality,
            total,
            time_span_days: (params.end_date - params.start_date).num_days(),
        }
    }

    /// Parse string-keyed parameters and answer the query.
    ///
    /// Unknown data-type keys propagate as [`Error::UnknownDataType`] — a
    /// hard stop for that query, matching the dashboard contract.
    pub fn query_raw(&self, raw: &RawQueryParams) -> Result<QueryResult> {
        let params = raw.parse()?;
        Ok(self.query(&params))
    }

    /// Apply the optional attribute filter in place, fail-open on any
    /// validation problem.
    fn apply_predicate(&self, rows: &mut Vec<Sample>, params: &QueryParams) {
        let Some(raw) = &params.predicate else {
            return;
        };

        if !raw.is_fully_specified() {
            debug!("predicate incomplete, skipping attribute filter");
            return;
        }

        let Some(spec) = self.schema.find(params.data_type, &raw.field) else {
            warn!(
                field = %raw.field,
                data_type = %params.data_type,
                "predicate references unknown field, keeping all rows"
            );
            return;
        };

        match CompiledPredicate::compile(raw, spec) {
            Ok(compiled) => {
                let before = rows.len();
                rows.retain(|sample| compiled.matches(sample));
                debug!(kept = rows.len(), dropped = before - rows.len(), "predicate applied");
            }
            Err(error) => {
                warn!(%error, field = %raw.field, "invalid predicate, keeping all rows");
            }
        }
    }
}

/// Bucket rows by the requested granularity.
///
/// Daily synthesis means every granularity currently degenerates to the
/// identity mapping; the hook exists so future aggregation can land
/// without touching the query pipeline. Rows are never dropped here and
/// chronological order is preserved.
fn aggregate_by_granularity(rows: Vec<Sample>, _granularity: Granularity) -> Vec<Sample> {
    rows
}
