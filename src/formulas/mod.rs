// ============================================================================
// Formulas Module
// The formula table: independent validated closed-form computations
// ============================================================================

pub mod physics;
pub mod special_numbers;
pub mod temperature;
