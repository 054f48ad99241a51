// ============================================================================
// Ratio Engine
// Shape-aware dispatcher over interchangeable division strategies
// ============================================================================

use crate::engine::factory::build_strategy;
use crate::interfaces::{DivisionStrategy, EngineConfig, StrategyKind};
use crate::numeric::{
    validate_scalar, validate_sequence, DomainError, FormulaResult, ValidationError, Value,
};

// ============================================================================
// Shape Classification
// ============================================================================

/// Shape of a pair of dispatcher inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Neither operand is a sequence; the pair is validated as two
    /// scalars downstream
    Scalar,
    /// Both operands are sequences
    Vector,
    /// One sequence, one non-sequence
    Mismatched,
}

impl Shape {
    /// Classify a pair of inputs by their outer shape
    ///
    /// Only the scalar-vs-sequence distinction is decided here; a
    /// non-numeric scalar like `Value::Text` still classifies as
    /// `Scalar` and is rejected by the validator, so the caller sees
    /// an int/float error naming the offending parameter rather than
    /// a shape error.
    pub fn classify(lhs: &Value, rhs: &Value) -> Self {
        match (lhs.is_list(), rhs.is_list()) {
            (true, true) => Shape::Vector,
            (false, false) => Shape::Scalar,
            _ => Shape::Mismatched,
        }
    }
}

// ============================================================================
// Dispatch Output
// ============================================================================

/// Outcome of a dispatch call
///
/// The vector variant carries one result per aligned input pair, in
/// input order; each slot may independently be an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// Result of a scalar-scalar call
    Scalar(f64),
    /// Element-wise results of a vector-vector call
    Vector(Vec<FormulaResult<f64>>),
}

impl Evaluation {
    /// The scalar result, if this was a scalar call
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Evaluation::Scalar(v) => Some(*v),
            Evaluation::Vector(_) => None,
        }
    }

    /// The per-slot results, if this was a vector call
    pub fn as_vector(&self) -> Option<&[FormulaResult<f64>]> {
        match self {
            Evaluation::Scalar(_) => None,
            Evaluation::Vector(slots) => Some(slots),
        }
    }
}

/// Mean over the valid slots of a batch
///
/// The mean is lossy by design: slots that failed are excluded from
/// the average rather than propagated. `dropped` reports how many
/// slots were excluded so callers can judge the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanReport {
    /// Arithmetic mean of the valid results
    pub mean: f64,
    /// Number of valid results that contributed to the mean
    pub sample_count: usize,
    /// Number of error slots excluded from the mean
    pub dropped: usize,
}

// ============================================================================
// Ratio Engine
// ============================================================================

/// Dispatcher for the binary division operation
///
/// Classifies a pair of inputs as scalar or vector, validates them,
/// and routes the computation through the configured
/// [`DivisionStrategy`]. Stateless between calls; the engine only
/// holds its configuration and the strategy chosen at construction.
///
/// # Example
/// ```
/// use formula_engine::prelude::*;
///
/// let engine = RatioEngine::new(EngineConfig::velocity());
/// let result = engine.dispatch(&Value::from(100.0), &Value::from(10.0)).unwrap();
/// assert_eq!(result.as_scalar(), Some(10.0));
/// ```
pub struct RatioEngine {
    /// Operation and operand names, plus the configured strategy kind
    config: EngineConfig,

    /// Interchangeable computation strategy
    strategy: Box<dyn DivisionStrategy>,
}

impl RatioEngine {
    /// Create an engine from a configuration
    ///
    /// The strategy is constructed once from `config.strategy`; use
    /// [`set_strategy`](Self::set_strategy) to swap it later.
    pub fn new(config: EngineConfig) -> Self {
        let strategy = build_strategy(config.strategy, &config.operation);
        Self { config, strategy }
    }

    /// Create an engine with an externally supplied strategy
    pub fn with_strategy(config: EngineConfig, strategy: Box<dyn DivisionStrategy>) -> Self {
        Self { config, strategy }
    }

    /// Dispatch a pair of inputs to the configured strategy
    ///
    /// Scalar pairs produce [`Evaluation::Scalar`]; sequence pairs of
    /// equal length produce [`Evaluation::Vector`] with one slot per
    /// aligned pair. Mismatched shapes and mismatched lengths fail
    /// before any arithmetic runs.
    pub fn dispatch(&self, lhs: &Value, rhs: &Value) -> FormulaResult<Evaluation> {
        match Shape::classify(lhs, rhs) {
            Shape::Scalar => {
                let a = validate_scalar(lhs, &self.config.lhs_name)?;
                let b = validate_scalar(rhs, &self.config.rhs_name)?;
                tracing::debug!(
                    operation = %self.config.operation,
                    strategy = self.strategy.name(),
                    "dispatching scalar pair"
                );
                self.strategy.divide(a, b).map(Evaluation::Scalar)
            },
            Shape::Vector => self.batch(lhs, rhs).map(Evaluation::Vector),
            Shape::Mismatched => Err(ValidationError::new(["scalar-scalar or vector-vector"])
                .with_actual(format!("{}, {}", lhs.kind(), rhs.kind()))
                .with_parameter(format!(
                    "{} and {}",
                    self.config.lhs_name, self.config.rhs_name
                ))
                .into()),
        }
    }

    /// Mean over the vector path, excluding error slots
    ///
    /// Lossy by design: slots that fail (for example a zero divisor)
    /// are dropped from the average instead of propagated, and the
    /// number of dropped slots is reported in the result. Fails with
    /// a [`DomainError`] when no valid results remain.
    pub fn compute_mean(&self, lhs: &Value, rhs: &Value) -> FormulaResult<MeanReport> {
        let slots = self.batch(lhs, rhs)?;

        let valid: Vec<f64> = slots.iter().filter_map(|r| r.as_ref().ok().copied()).collect();
        let dropped = slots.len() - valid.len();

        if valid.is_empty() {
            return Err(DomainError::new("no valid results")
                .with_code("EMPTY_MEAN")
                .into());
        }
        if dropped > 0 {
            tracing::debug!(
                operation = %self.config.operation,
                dropped,
                "excluding failed slots from mean"
            );
        }

        Ok(MeanReport {
            mean: valid.iter().sum::<f64>() / valid.len() as f64,
            sample_count: valid.len(),
            dropped,
        })
    }

    /// Swap the division strategy on an existing engine
    ///
    /// Affects only subsequent calls.
    pub fn set_strategy(&mut self, kind: StrategyKind) {
        self.config.strategy = kind;
        self.strategy = build_strategy(kind, &self.config.operation);
    }

    /// Name of the active strategy
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate both sequences and run the batch through the strategy
    fn batch(&self, lhs: &Value, rhs: &Value) -> FormulaResult<Vec<FormulaResult<f64>>> {
        let xs = validate_sequence(lhs, &self.config.lhs_name)?;
        let ys = validate_sequence(rhs, &self.config.rhs_name)?;

        if xs.len() != ys.len() {
            return Err(DomainError::new("sequence lengths must match")
                .with_code("LENGTH_MISMATCH")
                .into());
        }

        tracing::debug!(
            operation = %self.config.operation,
            strategy = self.strategy.name(),
            pairs = xs.len(),
            "dispatching vector batch"
        );
        Ok(self.strategy.divide_batch(&xs, &ys))
    }
}

impl Default for RatioEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::FormulaError;

    fn velocity_engine(kind: StrategyKind) -> RatioEngine {
        RatioEngine::new(EngineConfig::velocity().with_strategy(kind))
    }

    #[test]
    fn test_shape_classification() {
        assert_eq!(
            Shape::classify(&Value::Int(1), &Value::Float(2.0)),
            Shape::Scalar
        );
        assert_eq!(
            Shape::classify(&Value::list([1]), &Value::list([2])),
            Shape::Vector
        );
        assert_eq!(
            Shape::classify(&Value::Int(1), &Value::list([2])),
            Shape::Mismatched
        );
        // Non-numeric scalars still classify by shape; the validator
        // rejects them afterwards
        assert_eq!(
            Shape::classify(&Value::from("a"), &Value::Null),
            Shape::Scalar
        );
    }

    #[test]
    fn test_scalar_dispatch() {
        let engine = velocity_engine(StrategyKind::Plain);
        let result = engine
            .dispatch(&Value::Float(100.0), &Value::Float(10.0))
            .unwrap();
        assert_eq!(result.as_scalar(), Some(10.0));
    }

    #[test]
    fn test_vector_dispatch() {
        let engine = velocity_engine(StrategyKind::Plain);
        let result = engine
            .dispatch(&Value::list([100, 200, 300]), &Value::list([10, 20, 30]))
            .unwrap();
        let slots = result.as_vector().unwrap();
        assert_eq!(slots, [Ok(10.0), Ok(10.0), Ok(10.0)]);
    }

    #[test]
    fn test_zero_divisor_carries_dividend() {
        let engine = velocity_engine(StrategyKind::Plain);
        let err = engine
            .dispatch(&Value::Float(150.0), &Value::Float(0.0))
            .unwrap_err();
        match err {
            FormulaError::DivisionByZero(e) => assert_eq!(e.dividend, Some(150.0)),
            other => panic!("expected division-by-zero error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_operand_fails_validation() {
        let engine = velocity_engine(StrategyKind::Plain);
        let err = engine
            .dispatch(&Value::from("12"), &Value::Int(30))
            .unwrap_err();
        match err {
            FormulaError::Validation(v) => {
                assert_eq!(v.expected.as_slice(), ["int", "float"]);
                assert_eq!(v.parameter.as_deref(), Some("distance"));
            },
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_shapes_name_both_parameters() {
        let engine = velocity_engine(StrategyKind::Plain);
        let err = engine
            .dispatch(&Value::Int(1), &Value::list([1]))
            .unwrap_err();
        match err {
            FormulaError::Validation(v) => {
                assert_eq!(v.expected.as_slice(), ["scalar-scalar or vector-vector"]);
                assert_eq!(v.actual.as_deref(), Some("int, list"));
                assert_eq!(v.parameter.as_deref(), Some("distance and time"));
            },
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_length_mismatch_yields_no_partial_results() {
        let engine = velocity_engine(StrategyKind::Plain);
        let err = engine
            .dispatch(&Value::list([1, 2]), &Value::list([1]))
            .unwrap_err();
        match err {
            FormulaError::Domain(d) => assert_eq!(d.code, Some("LENGTH_MISMATCH")),
            other => panic!("expected domain error, got {:?}", other),
        }
    }

    #[test]
    fn test_vector_slots_fail_independently() {
        let engine = velocity_engine(StrategyKind::Plain);
        let result = engine
            .dispatch(&Value::list([100, 200, 300]), &Value::list([10, 0, 30]))
            .unwrap();
        let slots = result.as_vector().unwrap();
        assert_eq!(slots[0], Ok(10.0));
        assert!(slots[1].is_err());
        assert_eq!(slots[2], Ok(10.0));
    }

    #[test]
    fn test_invalid_element_short_circuits_batch() {
        let engine = velocity_engine(StrategyKind::Plain);
        let lhs = Value::list([Value::Int(1), Value::Bool(true)]);
        let err = engine.dispatch(&lhs, &Value::list([1, 2])).unwrap_err();
        match err {
            FormulaError::Validation(v) => assert_eq!(v.parameter.as_deref(), Some("distance[1]")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_mean_excludes_error_slots() {
        let engine = velocity_engine(StrategyKind::Plain);
        // Slots evaluate to [10.0, Err(divide by zero), 30.0]
        let report = engine
            .compute_mean(&Value::list([100, 200, 300]), &Value::list([10, 0, 10]))
            .unwrap();
        assert_eq!(report.mean, 20.0);
        assert_eq!(report.sample_count, 2);
        assert_eq!(report.dropped, 1);
    }

    #[test]
    fn test_mean_with_no_valid_results() {
        let engine = velocity_engine(StrategyKind::Plain);
        let err = engine
            .compute_mean(&Value::list([1, 2]), &Value::list([0, 0]))
            .unwrap_err();
        match err {
            FormulaError::Domain(d) => assert_eq!(d.code, Some("EMPTY_MEAN")),
            other => panic!("expected domain error, got {:?}", other),
        }
    }

    #[test]
    fn test_mean_requires_sequences() {
        let engine = velocity_engine(StrategyKind::Plain);
        let err = engine
            .compute_mean(&Value::Int(1), &Value::Int(2))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_strategy_swap_affects_subsequent_calls() {
        let mut engine = velocity_engine(StrategyKind::Plain);
        assert_eq!(engine.strategy_name(), "plain");

        engine.set_strategy(StrategyKind::Vectorized);
        assert_eq!(engine.strategy_name(), "vectorized");
        assert_eq!(engine.config().strategy, StrategyKind::Vectorized);

        let result = engine
            .dispatch(&Value::Float(100.0), &Value::Float(10.0))
            .unwrap();
        assert_eq!(result.as_scalar(), Some(10.0));
    }

    #[test]
    fn test_strategies_agree_on_vector_dispatch() {
        let plain = velocity_engine(StrategyKind::Plain);
        let vectorized = velocity_engine(StrategyKind::Vectorized);

        let xs = Value::list([100, 200, 300, 400, 500]);
        let ys = Value::list([10, 0, 30, 40, 50]);

        assert_eq!(
            plain.dispatch(&xs, &ys).unwrap(),
            vectorized.dispatch(&xs, &ys).unwrap()
        );
    }

    #[test]
    fn test_empty_vectors_dispatch_to_empty_batch() {
        let engine = velocity_engine(StrategyKind::Plain);
        let result = engine
            .dispatch(&Value::List(Vec::new()), &Value::List(Vec::new()))
            .unwrap();
        assert!(result.as_vector().unwrap().is_empty());
    }
}
