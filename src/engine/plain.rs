// ============================================================================
// Plain Division Strategy
// Straightforward per-pair arithmetic, the reference implementation
// ============================================================================

use crate::interfaces::DivisionStrategy;
use crate::numeric::{DivisionByZeroError, FormulaResult};

/// Plain arithmetic division
///
/// Checks the divisor against zero before dividing and returns a
/// [`DivisionByZeroError`] carrying the dividend instead of letting
/// the division produce an infinity.
pub struct PlainDivision {
    operation: String,
}

impl PlainDivision {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }
}

impl DivisionStrategy for PlainDivision {
    fn divide(&self, dividend: f64, divisor: f64) -> FormulaResult<f64> {
        if divisor == 0.0 {
            return Err(DivisionByZeroError::new()
                .with_operation(&self.operation)
                .with_dividend(dividend)
                .into());
        }
        Ok(dividend / divisor)
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}
