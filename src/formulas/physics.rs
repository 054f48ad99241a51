// ============================================================================
// Physics Formulas
// Closed-form kinematics, mechanics, and wave formulas
// ============================================================================
//
// Every formula follows the same validated-computation pattern:
// validate inputs, evaluate one closed-form expression, apply domain
// checks, return a FormulaResult. Only `velocity` routes through the
// dispatcher; the rest are single expressions.

use crate::engine::{self, Evaluation, MeanReport};
use crate::numeric::{
    validate_scalar, DivisionByZeroError, DomainError, FormulaResult, Value,
};

/// Standard atmospheric pressure at sea level, in pascals
pub const SEA_LEVEL_PRESSURE_PA: f64 = 101_325.0;

/// Velocity: v = distance / time
///
/// Accepts either a scalar pair or two sequences of equal length;
/// routes through the shared ratio engine, so vector inputs yield one
/// result slot per pair.
///
/// # Example
/// ```
/// use formula_engine::formulas::physics;
/// use formula_engine::numeric::Value;
///
/// let v = physics::velocity(&Value::from(100.0), &Value::from(10.0)).unwrap();
/// assert_eq!(v.as_scalar(), Some(10.0));
/// ```
pub fn velocity(distance: &Value, time: &Value) -> FormulaResult<Evaluation> {
    engine::shared().read().dispatch(distance, time)
}

/// Mean velocity over aligned distance/time sequences
///
/// Slots with a zero time are excluded from the mean; the report
/// carries the number of excluded slots.
pub fn average_velocity(distances: &Value, times: &Value) -> FormulaResult<MeanReport> {
    engine::shared().read().compute_mean(distances, times)
}

/// Acceleration: a = Δv / t
pub fn acceleration(velocity: &Value, time: &Value) -> FormulaResult<f64> {
    let v = validate_scalar(velocity, "velocity")?;
    let t = validate_scalar(time, "time")?;
    if t == 0.0 {
        return Err(DivisionByZeroError::new()
            .with_operation("acceleration")
            .with_dividend(v)
            .into());
    }
    Ok(v / t)
}

/// Distance under uniform acceleration: s = v0·t + a·t²/2
pub fn uniform_accelerated_distance(
    initial_velocity: &Value,
    acceleration: &Value,
    time: &Value,
) -> FormulaResult<f64> {
    let v0 = validate_scalar(initial_velocity, "initial_velocity")?;
    let a = validate_scalar(acceleration, "acceleration")?;
    let t = validate_scalar(time, "time")?;
    Ok(v0 * t + 0.5 * a * t * t)
}

/// Kinetic energy: Ek = m·v²/2
pub fn kinetic_energy(mass: &Value, velocity: &Value) -> FormulaResult<f64> {
    let m = validate_scalar(mass, "mass")?;
    let v = validate_scalar(velocity, "velocity")?;
    if m < 0.0 {
        return Err(DomainError::new("mass cannot be negative")
            .with_code("NEGATIVE_MASS")
            .into());
    }
    Ok(0.5 * m * v * v)
}

/// Potential energy: Ep = m·g·h
pub fn potential_energy(mass: &Value, gravity: &Value, height: &Value) -> FormulaResult<f64> {
    let m = validate_scalar(mass, "mass")?;
    let g = validate_scalar(gravity, "gravity")?;
    let h = validate_scalar(height, "height")?;
    if m < 0.0 {
        return Err(DomainError::new("mass cannot be negative")
            .with_code("NEGATIVE_MASS")
            .into());
    }
    Ok(m * g * h)
}

/// Density: ρ = m / V
pub fn density(mass: &Value, volume: &Value) -> FormulaResult<f64> {
    let m = validate_scalar(mass, "mass")?;
    let v = validate_scalar(volume, "volume")?;
    if m < 0.0 {
        return Err(DomainError::new("mass cannot be negative")
            .with_code("NEGATIVE_MASS")
            .into());
    }
    if v == 0.0 {
        return Err(DivisionByZeroError::new()
            .with_operation("density")
            .with_dividend(m)
            .into());
    }
    Ok(m / v)
}

/// Ohm's law: U = I·R
pub fn ohms_law(current: &Value, resistance: &Value) -> FormulaResult<f64> {
    let i = validate_scalar(current, "current")?;
    let r = validate_scalar(resistance, "resistance")?;
    Ok(i * r)
}

/// Approximate altitude from atmospheric pressure (barometric formula)
///
/// Valid for pressures between zero and sea-level pressure
/// (101 325 Pa); anything outside that range is a domain error.
pub fn barometric_altitude(pressure: &Value) -> FormulaResult<f64> {
    let p = validate_scalar(pressure, "pressure")?;
    if p > SEA_LEVEL_PRESSURE_PA {
        return Err(DomainError::new("pressure exceeds sea-level pressure")
            .with_code("PRESSURE_RANGE")
            .into());
    }
    if p < 0.0 {
        return Err(DomainError::new("atmospheric pressure cannot be negative")
            .with_code("PRESSURE_RANGE")
            .into());
    }
    Ok(44_330.0 * (1.0 - (p / SEA_LEVEL_PRESSURE_PA).powf(1.0 / 5.5255)))
}

/// Centripetal force: F = m·v² / r
pub fn centripetal_force(mass: &Value, velocity: &Value, radius: &Value) -> FormulaResult<f64> {
    let m = validate_scalar(mass, "mass")?;
    let v = validate_scalar(velocity, "velocity")?;
    let r = validate_scalar(radius, "radius")?;
    if m < 0.0 {
        return Err(DomainError::new("mass cannot be negative")
            .with_code("NEGATIVE_MASS")
            .into());
    }
    if r <= 0.0 {
        return Err(DomainError::new("radius must be positive")
            .with_code("NON_POSITIVE_RADIUS")
            .into());
    }
    Ok(m * v * v / r)
}

/// Observed frequency under the Doppler effect
///
/// f = f0 · (v_wave + v_observer) / (v_wave - v_source)
///
/// A source moving at exactly the wave velocity makes the denominator
/// zero; a non-positive observed frequency means the source outruns
/// the wave, which is outside the formula's domain.
pub fn doppler_frequency(
    source_frequency: &Value,
    wave_velocity: &Value,
    observer_velocity: &Value,
    source_velocity: &Value,
) -> FormulaResult<f64> {
    let f0 = validate_scalar(source_frequency, "source_frequency")?;
    let wave = validate_scalar(wave_velocity, "wave_velocity")?;
    let observer = validate_scalar(observer_velocity, "observer_velocity")?;
    let source = validate_scalar(source_velocity, "source_velocity")?;

    if wave == source {
        return Err(DivisionByZeroError::new()
            .with_operation("doppler_frequency")
            .with_dividend(f0 * (wave + observer))
            .into());
    }

    let observed = f0 * (wave + observer) / (wave - source);
    if observed <= 0.0 {
        return Err(
            DomainError::new("observed frequency is not positive; source outruns the wave")
                .with_code("DOPPLER_RANGE")
                .into(),
        );
    }
    Ok(observed)
}
