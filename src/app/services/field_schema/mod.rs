//! Filter-field schema registry
//!
//! This module provides the static registry of filterable attributes per
//! measurement data type. Each attribute is described by a [`FieldSpec`]
//! whose kind is a tagged union: numeric fields carry their legal bounds,
//! text fields carry nothing. The registry is validated once when loaded;
//! after that, predicate compilation can trust every spec it hands out.

use crate::app::models::DataType;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod operators;


pub use operators::{NumericOperator, TextOperator};

// =============================================================================
// Field Specifications
// =============================================================================

/// Value-type tag of a filterable field
///
/// Numeric fields carry the closed interval an operand must fall into;
/// text fields accept any operand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Numeric field with inclusive operand bounds
    Number { min: f64, max: f64 },
    /// Free-text field
    Text,
}

impl FieldKind {
    /// True for numeric fields
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Number { .. })
    }
}

/// Declarative description of one filterable attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Display label, also the key predicates reference (e.g. "发电量")
    #[serde(rename = "field")]
    pub label: String,

    /// Unit of measure shown next to the label
    pub unit: String,

    /// Value-type tag with bounds for numeric fields
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Create a numeric field spec
    pub fn number(
        label: impl Into<String>,
        unit: impl Into<String>,
        min: f64,
        max: f64,
    ) -> Self {
        Self {
            label: label.into(),
            unit: unit.into(),
            kind: FieldKind::Number { min, max },
        }
    }

    /// Create a text field spec
    pub fn text(label: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            unit: unit.into(),
            kind: FieldKind::Text,
        }
    }

    /// Validate the spec's label and bounds
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(Error::data_validation("field spec label cannot be empty"));
        }
        if let FieldKind::Number { min, max } = self.kind {
            if !min.is_finite() || !max.is_finite() {
                return Err(Error::data_validation(format!(
                    "field '{}' has non-finite bounds",
                    self.label
                )));
            }
            if min >= max {
                return Err(Error::data_validation(format!(
                    "field '{}' bounds are inverted ({} >= {})",
                    self.label, min, max
                )));
            }
        }
        Ok(())
    }

    /// Inclusive operand bounds for numeric fields, `None` for text fields
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self.kind {
            FieldKind::Number { min, max } => Some((min, max)),
            FieldKind::Text => None,
        }
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Static registry mapping each data type to its filterable fields
///
/// Loaded once at startup and validated eagerly, so illegal specs are a
/// load-time error rather than a per-query surprise.
#[derive(Debug, Clone)]
pub struct FieldSchemaRegistry {
    specs: HashMap<DataType, Vec<FieldSpec>>,
}

impl FieldSchemaRegistry {
    /// Build a registry from per-data-type spec lists, validating each
    /// spec and rejecting duplicate labels within a data type.
    pub fn new(specs: HashMap<DataType, Vec<FieldSpec>>) -> Result<Self> {
        for (data_type, fields) in &specs {
            let mut seen = Vec::with_capacity(fields.len());
            for field in fields {
                field.validate()?;
                if seen.contains(&&field.label) {
                    return Err(Error::data_validation(format!(
                        "duplicate field label '{}' for data type '{}'",
                        field.label, data_type
                    )));
                }
                seen.push(&field.label);
            }
        }
        Ok(Self { specs })
    }

    /// The built-in schema backing the dashboard's filter panel
    pub fn builtin() -> Self {
        let mut specs = HashMap::new();

        specs.insert(
            DataType::Generation,
            vec![
                FieldSpec::number("发电量", "MWh", 0.0, 10_000.0),
                FieldSpec::number("功率", "MW", 0.0, 5_000.0),
                FieldSpec::number("等效利用小时数", "h", 0.0, 8_760.0),
                FieldSpec::number("容量因子", "%", 0.0, 100.0),
            ],
        );
        specs.insert(
            DataType::Price,
            vec![
                FieldSpec::number("现货价格", "元/MWh", 0.0, 2_000.0),
                FieldSpec::number("日前价格", "元/MWh", 0.0, 2_000.0),
                FieldSpec::number("辅助服务价格", "元/MWh", 0.0, 500.0),
                FieldSpec::number("碳价格", "元/吨", 0.0, 200.0),
            ],
        );
        specs.insert(
            DataType::Load,
            vec![
                FieldSpec::number("用电负荷", "MW", 0.0, 10_000.0),
                FieldSpec::number("峰值负荷", "MW", 0.0, 12_000.0),
                FieldSpec::number("谷值负荷", "MW", 0.0, 8_000.0),
                FieldSpec::number("负荷率", "%", 0.0, 100.0),
            ],
        );
        specs.insert(
            DataType::Charging,
            vec![
                FieldSpec::number("充电量", "kWh", 0.0, 1_000.0),
                FieldSpec::number("充电时长", "h", 0.0, 24.0),
                FieldSpec::number("充电功率", "kW", 0.0, 500.0),
                FieldSpec::number("充电费用", "元", 0.0, 1_000.0),
            ],
        );

        // The built-in schema is known-good; construction cannot fail.
        Self::new(specs).expect("built-in field schema must be valid")
    }

    /// Filterable fields for a data type, in declaration order
    pub fn fields_for(&self, data_type: DataType) -> &[FieldSpec] {
        self.specs
            .get(&data_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look up one field spec by data type and label
    pub fn find(&self, data_type: DataType, label: &str) -> Option<&FieldSpec> {
        self.fields_for(data_type)
            .iter()
            .find(|spec| spec.label == label)
    }
}

impl Default for FieldSchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
