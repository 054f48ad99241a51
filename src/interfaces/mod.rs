// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod division_strategy;

pub use division_strategy::{DivisionStrategy, EngineConfig, StrategyKind};
