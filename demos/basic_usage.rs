// ============================================================================
// Basic Usage Example
// Demonstrates dispatch, strategy swapping, and the formula table
// ============================================================================

use formula_engine::formulas::{physics, special_numbers, temperature};
use formula_engine::prelude::*;

fn main() -> Result<(), FormulaError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    // Scalar dispatch through the velocity engine
    let mut engine = RatioEngineBuilder::velocity().build()?;
    let v = engine.dispatch(&Value::from(100.0), &Value::from(10.0))?;
    println!("velocity(100, 10) = {:?} [{}]", v.as_scalar(), engine.strategy_name());

    // Swap to the vectorized strategy and run a batch
    engine.set_strategy(StrategyKind::Vectorized);
    let batch = engine.dispatch(
        &Value::list([100, 200, 300]),
        &Value::list([10, 0, 30]),
    )?;
    println!("batch [{}]:", engine.strategy_name());
    if let Some(slots) = batch.as_vector() {
        for (i, slot) in slots.iter().enumerate() {
            match slot {
                Ok(value) => println!("  [{}] = {}", i, value),
                Err(err) => println!("  [{}] failed: {}", i, err),
            }
        }
    }

    // Mean over the valid slots, with the dropped count surfaced
    let report = engine.compute_mean(&Value::list([100, 200, 300]), &Value::list([10, 0, 10]))?;
    println!(
        "mean velocity = {} ({} samples, {} dropped)",
        report.mean, report.sample_count, report.dropped
    );

    // Errors are data: branch on the taxonomy instead of catching faults
    match engine.dispatch(&Value::from("12"), &Value::from(30)) {
        Err(FormulaError::Validation(e)) => println!("validation: {}", e),
        other => println!("unexpected: {:?}", other),
    }

    // The formula table rides on the same validation and error types
    let altitude = physics::barometric_altitude(&Value::from(90_000.0))?;
    println!("altitude at 90 kPa = {:.1} m", altitude);

    let boiling = temperature::convert(
        &Value::from(100.0),
        temperature::Scale::Celsius,
        temperature::Scale::Fahrenheit,
    )?;
    println!("100 °C = {} °F", boiling);

    println!("153 armstrong? {}", special_numbers::is_armstrong(&Value::from(153))?);

    Ok(())
}
