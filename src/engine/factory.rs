// ============================================================================
// Engine Factory
// Creates ratio engines with proper configuration
// ============================================================================

use crate::engine::{PlainDivision, RatioEngine, VectorizedDivision};
use crate::interfaces::{DivisionStrategy, EngineConfig, StrategyKind};
use crate::numeric::FormulaResult;
use parking_lot::RwLock;
use std::sync::OnceLock;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates the appropriate division strategy from configuration
pub(crate) fn build_strategy(kind: StrategyKind, operation: &str) -> Box<dyn DivisionStrategy> {
    match kind {
        StrategyKind::Plain => Box::new(PlainDivision::new(operation)),
        StrategyKind::Vectorized => Box::new(VectorizedDivision::new(operation)),
    }
}

/// Creates a ratio engine from configuration
///
/// # Example
/// ```
/// use formula_engine::prelude::*;
///
/// let config = EngineConfig::velocity().with_strategy(StrategyKind::Vectorized);
/// let engine = create_from_config(config).unwrap();
/// assert_eq!(engine.strategy_name(), "vectorized");
/// ```
pub fn create_from_config(config: EngineConfig) -> FormulaResult<RatioEngine> {
    config.validate()?;
    Ok(RatioEngine::new(config))
}

/// Memoized engine configured for velocity (v = distance / time)
///
/// Purely a construction cache: replacing it with a fresh
/// `RatioEngine::new(EngineConfig::velocity())` per call produces
/// identical observable results. The lock exists so callers can swap
/// the strategy on the shared instance.
pub fn shared() -> &'static RwLock<RatioEngine> {
    static SHARED: OnceLock<RwLock<RatioEngine>> = OnceLock::new();
    SHARED.get_or_init(|| RwLock::new(RatioEngine::new(EngineConfig::velocity())))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating ratio engines with a fluent API
///
/// # Example
/// ```
/// use formula_engine::prelude::*;
///
/// let engine = RatioEngineBuilder::new("density")
///     .operands("mass", "volume")
///     .vectorized()
///     .build()
///     .unwrap();
///
/// let result = engine.dispatch(&Value::from(12.0), &Value::from(4.0)).unwrap();
/// assert_eq!(result.as_scalar(), Some(3.0));
/// ```
pub struct RatioEngineBuilder {
    config: EngineConfig,
}

impl RatioEngineBuilder {
    /// Create a new builder for the named operation
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            config: EngineConfig::new(operation),
        }
    }

    /// Velocity preset (v = distance / time)
    pub fn velocity() -> Self {
        Self {
            config: EngineConfig::velocity(),
        }
    }

    /// Set the operand names reported in error values
    pub fn operands(mut self, lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        self.config = self.config.with_operands(lhs, rhs);
        self
    }

    /// Select plain per-pair arithmetic (default)
    pub fn plain(mut self) -> Self {
        self.config.strategy = StrategyKind::Plain;
        self
    }

    /// Select the vectorized batch strategy
    pub fn vectorized(mut self) -> Self {
        self.config.strategy = StrategyKind::Vectorized;
        self
    }

    /// Select a strategy by kind
    pub fn strategy(mut self, kind: StrategyKind) -> Self {
        self.config.strategy = kind;
        self
    }

    /// Build the engine
    pub fn build(self) -> FormulaResult<RatioEngine> {
        create_from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Evaluation;
    use crate::numeric::Value;

    #[test]
    fn test_create_from_config() {
        let engine = create_from_config(EngineConfig::velocity()).unwrap();
        assert_eq!(engine.config().operation, "velocity");
        assert_eq!(engine.strategy_name(), "plain");
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        assert!(create_from_config(EngineConfig::new("")).is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let engine = RatioEngineBuilder::new("acceleration")
            .operands("velocity", "time")
            .vectorized()
            .build()
            .unwrap();

        assert_eq!(engine.config().operation, "acceleration");
        assert_eq!(engine.strategy_name(), "vectorized");
    }

    #[test]
    fn test_builder_velocity_preset() {
        let builder = RatioEngineBuilder::velocity();
        assert_eq!(builder.get_config().lhs_name, "distance");

        let engine = builder.build().unwrap();
        let result = engine
            .dispatch(&Value::Float(100.0), &Value::Float(10.0))
            .unwrap();
        assert_eq!(result, Evaluation::Scalar(10.0));
    }

    #[test]
    fn test_shared_matches_fresh_instance() {
        let fresh = RatioEngine::new(EngineConfig::velocity());
        let lhs = Value::list([100, 200]);
        let rhs = Value::list([10, 20]);

        assert_eq!(
            shared().read().dispatch(&lhs, &rhs).unwrap(),
            fresh.dispatch(&lhs, &rhs).unwrap()
        );
    }
}
