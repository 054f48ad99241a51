// ============================================================================
// Formula Engine Library
// Validated formula evaluation with pluggable computation strategies
// ============================================================================

//! # Formula Engine
//!
//! A library of independent physics and number-theory formulas built
//! around one generic core: the validated-computation pattern. Every
//! input is type-checked before any arithmetic runs, computation is
//! routed through an interchangeable strategy, and every outcome is a
//! typed result-or-error.
//!
//! ## Features
//!
//! - **Shape-aware dispatch**: scalar pairs and sequence pairs route
//!   through the same engine; mismatched shapes fail before compute
//! - **Pluggable strategies** (plain arithmetic, vectorized batches)
//!   selected at construction, swappable at runtime
//! - **Typed error taxonomy**: validation, domain, and
//!   division-by-zero errors carry structured data for programmatic
//!   branching
//! - **Formula table**: kinematics, mechanics, temperature
//!   conversion, and number classification built on the same core
//!
//! ## Example
//!
//! ```rust
//! use formula_engine::prelude::*;
//!
//! let engine = RatioEngineBuilder::velocity()
//!     .vectorized()
//!     .build()
//!     .unwrap();
//!
//! // Scalar pair
//! let v = engine.dispatch(&Value::from(100.0), &Value::from(10.0)).unwrap();
//! assert_eq!(v.as_scalar(), Some(10.0));
//!
//! // Aligned sequences: each slot carries its own outcome
//! let v = engine
//!     .dispatch(&Value::list([100, 200, 300]), &Value::list([10, 20, 30]))
//!     .unwrap();
//! assert_eq!(v.as_vector().unwrap(), [Ok(10.0), Ok(10.0), Ok(10.0)]);
//!
//! // Division by zero is data, not a fault
//! let err = engine.dispatch(&Value::from(150.0), &Value::from(0.0)).unwrap_err();
//! assert!(err.is_division_by_zero());
//! ```

pub mod engine;
pub mod formulas;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::engine::{
        create_from_config, shared, Evaluation, MeanReport, PlainDivision, RatioEngine,
        RatioEngineBuilder, Shape, VectorizedDivision,
    };
    pub use crate::interfaces::{DivisionStrategy, EngineConfig, StrategyKind};
    pub use crate::numeric::{
        validate_integer, validate_scalar, validate_sequence, DivisionByZeroError, DomainError,
        FormulaError, FormulaResult, ValidationError, Value,
    };
}
