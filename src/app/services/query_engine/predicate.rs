//! Attribute filter compilation and evaluation
//!
//! A predicate arrives as three strings (field, operator, operand) and is
//! compiled against the field's schema entry before any row is touched.
//! Compilation parses the operator into the closed enum matching the
//! field's value type and validates the operand against the declared
//! bounds, so evaluation works only with well-formed, type-correct
//! predicates.

use crate::app::models::Sample;
use crate::app::services::field_schema::{FieldKind, FieldSpec, NumericOperator, TextOperator};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw attribute filter as received from the boundary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterPredicate {
    /// Field label the filter targets (e.g. "发电量")
    pub field: String,

    /// Operator token (e.g. ">", "between", "contains")
    pub operator: String,

    /// Operand text; `between` expects "min,max"
    pub operand: String,
}

impl FilterPredicate {
    /// Create a predicate from its three parts
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        operand: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            operand: operand.into(),
        }
    }

    /// True when field, operator and operand are all present.
    ///
    /// Incomplete predicates are treated as "no filter requested" rather
    /// than an error.
    pub fn is_fully_specified(&self) -> bool {
        !self.field.trim().is_empty()
            && !self.operator.trim().is_empty()
            && !self.operand.trim().is_empty()
    }
}

/// Numeric operand: a single comparison value or an inclusive range
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericOperand {
    Single(f64),
    Range(f64, f64),
}

/// A validated, type-correct predicate ready for row evaluation
///
/// The operator enum is chosen by the field's value-type tag, so an
/// illegal (type, operator) pair cannot be represented here.
#[derive(Debug, Clone, PartialEq)]
pub enum CompiledPredicate {
    /// Numeric comparison against the sample value
    Numeric {
        op: NumericOperator,
        operand: NumericOperand,
    },
    /// Case-insensitive text match against the sample's field label
    Text { op: TextOperator, operand: String },
}

impl CompiledPredicate {
    /// Compile a raw predicate against its field's schema entry.
    ///
    /// Fails with [`Error::InvalidPredicate`] when the operator is illegal
    /// for the field's value type, the operand does not parse, a single
    /// operand falls outside the field's declared bounds, or a `between`
    /// operand is not exactly two comma-separated values with `min < max`
    /// inside the bounds.
    pub fn compile(raw: &FilterPredicate, spec: &FieldSpec) -> Result<Self> {
        match spec.kind {
            FieldKind::Number { min, max } => {
                let op = NumericOperator::from_str(&raw.operator)?;
                let operand = match op {
                    NumericOperator::Between => parse_range_operand(&raw.operand, spec, min, max)?,
                    _ => parse_single_operand(&raw.operand, spec, min, max)?,
                };
                Ok(CompiledPredicate::Numeric { op, operand })
            }
            FieldKind::Text => {
                let op = TextOperator::from_str(&raw.operator)?;
                Ok(CompiledPredicate::Text {
                    op,
                    operand: raw.operand.trim().to_string(),
                })
            }
        }
    }

    /// Evaluate the predicate against one sample.
    ///
    /// Numeric predicates test the measured value; text predicates test
    /// the field label, the row's textual payload.
    pub fn matches(&self, sample: &Sample) -> bool {
        match self {
            CompiledPredicate::Numeric { op, operand } => match operand {
                NumericOperand::Single(value) => op.matches(sample.value, *value),
                NumericOperand::Range(lo, hi) => {
                    NumericOperator::matches_range(sample.value, *lo, *hi)
                }
            },
            CompiledPredicate::Text { op, operand } => op.matches(&sample.field_label, operand),
        }
    }
}

/// Parse and bounds-check a single numeric operand
fn parse_single_operand(
    operand: &str,
    spec: &FieldSpec,
    min: f64,
    max: f64,
) -> Result<NumericOperand> {
    let value = parse_float(operand, spec)?;
    if value < min || value > max {
        return Err(Error::invalid_predicate(format!(
            "operand {} for field '{}' is outside the declared bounds [{}, {}]",
            value, spec.label, min, max
        )));
    }
    Ok(NumericOperand::Single(value))
}

/// Parse and validate a `between` operand of the form "min,max"
fn parse_range_operand(
    operand: &str,
    spec: &FieldSpec,
    min: f64,
    max: f64,
) -> Result<NumericOperand> {
    let parts: Vec<&str> = operand.split(',').collect();
    if parts.len() != 2 {
        return Err(Error::invalid_predicate(format!(
            "between operand for field '{}' must be exactly two comma-separated values, got '{}'",
            spec.label, operand
        )));
    }

    let lo = parse_float(parts[0], spec)?;
    let hi = parse_float(parts[1], spec)?;

    if lo >= hi {
        return Err(Error::invalid_predicate(format!(
            "between range for field '{}' must satisfy min < max, got [{}, {}]",
            spec.label, lo, hi
        )));
    }
    if lo < min || hi > max {
        return Err(Error::invalid_predicate(format!(
            "between range [{}, {}] for field '{}' exceeds the declared bounds [{}, {}]",
            lo, hi, spec.label, min, max
        )));
    }

    Ok(NumericOperand::Range(lo, hi))
}

/// Parse one float operand with predicate-level error context
fn parse_float(text: &str, spec: &FieldSpec) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        Error::invalid_predicate(format!(
            "operand '{}' for field '{}' is not a number",
            trimmed, spec.label
        ))
    })?;
    if !value.is_finite() {
        return Err(Error::invalid_predicate(format!(
            "operand '{}' for field '{}' is not finite",
            trimmed, spec.label
        )));
    }
    Ok(value)
}
