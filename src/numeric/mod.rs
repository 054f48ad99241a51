// ============================================================================
// Numeric Module
// Dynamic values, validation, and the typed error taxonomy
// ============================================================================
//
// This module provides:
// - Value: loosely typed input representation for formula arguments
// - validate_scalar / validate_sequence / validate_integer
// - ValidationError / DomainError / DivisionByZeroError / FormulaError
//
// Design principles:
// - Validate before compute: no arithmetic runs on unchecked input
// - All operations return FormulaResult (no panics)
// - Errors are plain data with enough structure for callers to branch on

mod errors;
mod validator;
mod value;

pub use errors::{
    DivisionByZeroError, DomainError, ExpectedKinds, FormulaError, FormulaResult, ValidationError,
};
pub use validator::{validate_integer, validate_scalar, validate_sequence};
pub use value::Value;
