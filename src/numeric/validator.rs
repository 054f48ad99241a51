// ============================================================================
// Validator
// Normalizes and type-checks formula inputs before any arithmetic runs
// ============================================================================

use crate::numeric::errors::{FormulaResult, ValidationError};
use crate::numeric::value::Value;

/// Validate a single numeric value and widen it to f64.
///
/// Accepts `Int` and `Float`; everything else (including booleans)
/// fails with a [`ValidationError`] naming the parameter. Pure
/// function, no side effects.
pub fn validate_scalar(value: &Value, parameter: &str) -> FormulaResult<f64> {
    match value {
        Value::Int(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        other => Err(ValidationError::new(["int", "float"])
            .with_actual(other.kind())
            .with_parameter(parameter)
            .into()),
    }
}

/// Validate a homogeneous numeric sequence.
///
/// Requires a `List`; each element is validated via [`validate_scalar`]
/// with its index appended to the parameter name (`"name[3]"`). The
/// first invalid element short-circuits the whole call, so there are
/// no partial results.
pub fn validate_sequence(value: &Value, parameter: &str) -> FormulaResult<Vec<f64>> {
    let items = match value {
        Value::List(items) => items,
        other => {
            return Err(ValidationError::new(["list"])
                .with_actual(other.kind())
                .with_parameter(parameter)
                .into())
        },
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| validate_scalar(item, &format!("{}[{}]", parameter, i)))
        .collect()
}

/// Validate an integer value.
///
/// Used by the number-classification predicates, which are only
/// defined over integers. Floats are rejected rather than truncated.
pub fn validate_integer(value: &Value, parameter: &str) -> FormulaResult<i64> {
    match value {
        Value::Int(i) => Ok(*i),
        other => Err(ValidationError::new(["int"])
            .with_actual(other.kind())
            .with_parameter(parameter)
            .into()),
    }
}
