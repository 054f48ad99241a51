// ============================================================================
// Division Strategy Interface
// Defines the contract for interchangeable computation strategies
// ============================================================================

use crate::numeric::{DomainError, FormulaResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strategy pattern interface for the binary division operation
/// Implementations: PlainDivision, VectorizedDivision
///
/// Every implementation must produce bit-identical results for the
/// same inputs; the only legitimate difference between strategies is
/// throughput.
pub trait DivisionStrategy: Send + Sync {
    /// Divide a single pair of operands
    ///
    /// # Arguments
    /// * `dividend` - Numerator
    /// * `divisor` - Denominator, checked against zero before dividing
    ///
    /// # Returns
    /// The quotient, or a `DivisionByZeroError` carrying the dividend
    fn divide(&self, dividend: f64, divisor: f64) -> FormulaResult<f64>;

    /// Divide aligned pairs element-wise
    ///
    /// Each slot carries its own outcome; the batch does not abort on
    /// the first slot error. Callers guarantee equal slice lengths.
    fn divide_batch(&self, dividends: &[f64], divisors: &[f64]) -> Vec<FormulaResult<f64>> {
        debug_assert_eq!(
            dividends.len(),
            divisors.len(),
            "batch slices must have equal lengths"
        );
        dividends
            .iter()
            .zip(divisors)
            .map(|(&a, &b)| self.divide(a, b))
            .collect()
    }

    /// Get the strategy name for logging
    fn name(&self) -> &'static str;
}

/// Selects a [`DivisionStrategy`] at construction time
///
/// Exposed as a flag rather than runtime type inspection: the caller
/// chooses the capability once and the engine routes every call
/// through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StrategyKind {
    /// Straightforward per-pair arithmetic
    #[default]
    Plain,
    /// Chunked batch processing for throughput on long sequences
    Vectorized,
}

// ============================================================================
// Engine Configuration
// ============================================================================

/// Configuration for a [`RatioEngine`](crate::engine::RatioEngine)
///
/// The operation and operand names flow into error values so callers
/// can tell which parameter of which formula failed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Operation name reported in division-by-zero errors (e.g. "velocity")
    pub operation: String,

    /// Name of the left operand in error values (e.g. "distance")
    pub lhs_name: String,

    /// Name of the right operand in error values (e.g. "time")
    pub rhs_name: String,

    /// Which division strategy to construct
    pub strategy: StrategyKind,
}

impl EngineConfig {
    /// Create a configuration with default operand names
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            lhs_name: "dividend".to_string(),
            rhs_name: "divisor".to_string(),
            strategy: StrategyKind::Plain,
        }
    }

    /// Builder method: set the operand names used in error values
    pub fn with_operands(mut self, lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        self.lhs_name = lhs.into();
        self.rhs_name = rhs.into();
        self
    }

    /// Builder method: select the division strategy
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Velocity preset: v = distance / time
    pub fn velocity() -> Self {
        Self::new("velocity").with_operands("distance", "time")
    }

    /// Validate the configuration
    pub fn validate(&self) -> FormulaResult<()> {
        if self.operation.is_empty() {
            return Err(DomainError::new("operation name cannot be empty")
                .with_code("INVALID_CONFIG")
                .into());
        }
        if self.lhs_name.is_empty() || self.rhs_name.is_empty() {
            return Err(DomainError::new("operand names cannot be empty")
                .with_code("INVALID_CONFIG")
                .into());
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new("ratio")
    }
}
