//! Closed operator enumerations per field value type
//!
//! Operators are parsed against the field's kind, so an illegal
//! (type, operator) pair is a parse failure rather than a runtime branch:
//! a compiled predicate can only ever hold an operator that is legal for
//! its operand type.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operators legal for numeric fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericOperator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = "between")]
    Between,
}

impl NumericOperator {
    /// All numeric operators, in display order
    pub fn all() -> [NumericOperator; 6] {
        [
            NumericOperator::Eq,
            NumericOperator::Gt,
            NumericOperator::Lt,
            NumericOperator::Ge,
            NumericOperator::Le,
            NumericOperator::Between,
        ]
    }

    /// Wire token for this operator
    pub fn as_str(self) -> &'static str {
        match self {
            NumericOperator::Eq => "=",
            NumericOperator::Gt => ">",
            NumericOperator::Lt => "<",
            NumericOperator::Ge => ">=",
            NumericOperator::Le => "<=",
            NumericOperator::Between => "between",
        }
    }

    /// Evaluate the operator against a sample value and a single operand.
    ///
    /// `Between` never matches here; range operands are evaluated via
    /// [`NumericOperator::matches_range`].
    pub fn matches(self, value: f64, operand: f64) -> bool {
        match self {
            NumericOperator::Eq => value == operand,
            NumericOperator::Gt => value > operand,
            NumericOperator::Lt => value < operand,
            NumericOperator::Ge => value >= operand,
            NumericOperator::Le => value <= operand,
            NumericOperator::Between => false,
        }
    }

    /// Evaluate an inclusive range check
    pub fn matches_range(value: f64, min: f64, max: f64) -> bool {
        value >= min && value <= max
    }
}

impl FromStr for NumericOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "=" => Ok(NumericOperator::Eq),
            ">" => Ok(NumericOperator::Gt),
            "<" => Ok(NumericOperator::Lt),
            ">=" => Ok(NumericOperator::Ge),
            "<=" => Ok(NumericOperator::Le),
            "between" => Ok(NumericOperator::Between),
            other => Err(Error::invalid_predicate(format!(
                "operator '{other}' is not valid for numeric fields"
            ))),
        }
    }
}

impl fmt::Display for NumericOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Match operators legal for text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextOperator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "startsWith")]
    StartsWith,
    #[serde(rename = "endsWith")]
    EndsWith,
}

impl TextOperator {
    /// All text operators, in display order
    pub fn all() -> [TextOperator; 4] {
        [
            TextOperator::Eq,
            TextOperator::Contains,
            TextOperator::StartsWith,
            TextOperator::EndsWith,
        ]
    }

    /// Wire token for this operator
    pub fn as_str(self) -> &'static str {
        match self {
            TextOperator::Eq => "=",
            TextOperator::Contains => "contains",
            TextOperator::StartsWith => "startsWith",
            TextOperator::EndsWith => "endsWith",
        }
    }

    /// Evaluate the operator case-insensitively
    pub fn matches(self, value: &str, operand: &str) -> bool {
        let value = value.to_lowercase();
        let operand = operand.to_lowercase();
        match self {
            TextOperator::Eq => value == operand,
            TextOperator::Contains => value.contains(&operand),
            TextOperator::StartsWith => value.starts_with(&operand),
            TextOperator::EndsWith => value.ends_with(&operand),
        }
    }
}

impl FromStr for TextOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "=" => Ok(TextOperator::Eq),
            "contains" => Ok(TextOperator::Contains),
            "startsWith" => Ok(TextOperator::StartsWith),
            "endsWith" => Ok(TextOperator::EndsWith),
            other => Err(Error::invalid_predicate(format!(
                "operator '{other}' is not valid for text fields"
            ))),
        }
    }
}

impl fmt::Display for TextOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
