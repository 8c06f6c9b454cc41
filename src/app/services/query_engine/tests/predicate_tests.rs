//! Tests for predicate compilation and evaluation

use super::*;
use crate::Error;
use crate::app::services::field_schema::{FieldSpec, NumericOperator, TextOperator};
use crate::app::services::query_engine::predicate::{
    CompiledPredicate, FilterPredicate, NumericOperand,
};

fn generation_spec() -> FieldSpec {
    FieldSpec::number("发电量", "MWh", 0.0, 10_000.0)
}

#[test]
fn test_compile_single_numeric_operand() {
    let raw = FilterPredicate::new("发电量", ">", "2500");
    let compiled = CompiledPredicate::compile(&raw, &generation_spec()).unwrap();
    assert_eq!(
        compiled,
        CompiledPredicate::Numeric {
            op: NumericOperator::Gt,
            operand: NumericOperand::Single(2500.0),
        }
    );
}

#[test]
fn test_compile_rejects_non_numeric_operand() {
    let raw = FilterPredicate::new("发电量", ">", "abc");
    let err = CompiledPredicate::compile(&raw, &generation_spec()).unwrap_err();
    assert!(matches!(err, Error::InvalidPredicate { .. }));
}

#[test]
fn test_compile_rejects_out_of_bounds_operand() {
    let raw = FilterPredicate::new("发电量", ">", "20000");
    assert!(CompiledPredicate::compile(&raw, &generation_spec()).is_err());

    let raw = FilterPredicate::new("发电量", "<", "-5");
    assert!(CompiledPredicate::compile(&raw, &generation_spec()).is_err());
}

#[test]
fn test_compile_rejects_text_operator_on_numeric_field() {
    let raw = FilterPredicate::new("发电量", "contains", "25");
    assert!(CompiledPredicate::compile(&raw, &generation_spec()).is_err());
}

#[test]
fn test_between_requires_exactly_two_values() {
    let spec = generation_spec();
    for operand in ["2500", "1,2,3", "", ","] {
        let raw = FilterPredicate::new("发电量", "between", operand);
        assert!(
            CompiledPredicate::compile(&raw, &spec).is_err(),
            "operand '{operand}' must be rejected"
        );
    }
}

#[test]
fn test_between_requires_min_less_than_max() {
    let spec = generation_spec();
    let raw = FilterPredicate::new("发电量", "between", "3000,1000");
    assert!(CompiledPredicate::compile(&raw, &spec).is_err());

    let raw = FilterPredicate::new("发电量", "between", "1000,1000");
    assert!(CompiledPredicate::compile(&raw, &spec).is_err());
}

#[test]
fn test_between_requires_range_within_bounds() {
    let spec = generation_spec();
    let raw = FilterPredicate::new("发电量", "between", "-10,500");
    assert!(CompiledPredicate::compile(&raw, &spec).is_err());

    let raw = FilterPredicate::new("发电量", "between", "500,10001");
    assert!(CompiledPredicate::compile(&raw, &spec).is_err());
}

#[test]
fn test_between_accepts_whitespace_around_values() {
    let raw = FilterPredicate::new("发电量", "between", " 1000 , 3000 ");
    let compiled = CompiledPredicate::compile(&raw, &generation_spec()).unwrap();
    assert_eq!(
        compiled,
        CompiledPredicate::Numeric {
            op: NumericOperator::Between,
            operand: NumericOperand::Range(1000.0, 3000.0),
        }
    );
}

#[test]
fn test_between_evaluation_is_inclusive() {
    let raw = FilterPredicate::new("发电量", "between", "1000,3000");
    let compiled = CompiledPredicate::compile(&raw, &generation_spec()).unwrap();

    let at_min = create_test_sample("wind1", "2024-01-01", 1000.0, SampleStatus::Normal);
    let at_max = create_test_sample("wind1", "2024-01-02", 3000.0, SampleStatus::Normal);
    let below = create_test_sample("wind1", "2024-01-03", 999.99, SampleStatus::Normal);
    let above = create_test_sample("wind1", "2024-01-04", 3000.01, SampleStatus::Normal);

    assert!(compiled.matches(&at_min));
    assert!(compiled.matches(&at_max));
    assert!(!compiled.matches(&below));
    assert!(!compiled.matches(&above));
}

#[test]
fn test_numeric_evaluation_against_value() {
    let raw = FilterPredicate::new("发电量", ">=", "2500");
    let compiled = CompiledPredicate::compile(&raw, &generation_spec()).unwrap();
    assert!(compiled.matches(&create_test_sample(
        "wind1",
        "2024-01-01",
        2500.0,
        SampleStatus::Normal
    )));
    assert!(!compiled.matches(&create_test_sample(
        "wind1",
        "2024-01-01",
        2499.99,
        SampleStatus::Anomaly
    )));
}

#[test]
fn test_text_predicate_matches_field_label() {
    let spec = FieldSpec::text("字段", "");
    let raw = FilterPredicate::new("字段", "contains", "日发电量");
    let compiled = CompiledPredicate::compile(&raw, &spec).unwrap();
    assert!(compiled.matches(&create_test_sample(
        "wind1",
        "2024-01-01",
        1500.0,
        SampleStatus::Normal
    )));

    let raw = FilterPredicate::new("字段", "startsWith", "光伏");
    let compiled = CompiledPredicate::compile(&raw, &spec).unwrap();
    assert!(!compiled.matches(&create_test_sample(
        "wind1",
        "2024-01-01",
        1500.0,
        SampleStatus::Normal
    )));
}

#[test]
fn test_text_field_rejects_numeric_only_operators() {
    let spec = FieldSpec::text("字段", "");
    for operator in [">", "<", ">=", "<=", "between"] {
        let raw = FilterPredicate::new("字段", operator, "值");
        assert!(
            CompiledPredicate::compile(&raw, &spec).is_err(),
            "operator '{operator}' must be rejected for text fields"
        );
    }
}

#[test]
fn test_fully_specified() {
    assert!(FilterPredicate::new("发电量", ">", "2500").is_fully_specified());
    assert!(!FilterPredicate::new("", ">", "2500").is_fully_specified());
    assert!(!FilterPredicate::new("发电量", " ", "2500").is_fully_specified());
    assert!(!FilterPredicate::new("发电量", ">", "").is_fully_specified());
    assert!(!FilterPredicate::default().is_fully_specified());
}
