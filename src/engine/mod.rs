// ============================================================================
// Engine Module
// Contains the dispatcher and the concrete division strategies
// ============================================================================

mod plain;
mod ratio_engine;
mod vectorized;

pub mod factory;

pub use factory::{create_from_config, shared, RatioEngineBuilder};
pub use plain::PlainDivision;
pub use ratio_engine::{Evaluation, MeanReport, RatioEngine, Shape};
pub use vectorized::VectorizedDivision;
