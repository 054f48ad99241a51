// ============================================================================
// Temperature Conversion
// Conversions between common temperature scales via a Celsius pivot
// ============================================================================

use crate::numeric::{validate_scalar, DomainError, FormulaResult, Value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Absolute zero expressed in degrees Celsius
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Reaumur,
}

impl Scale {
    /// Unit symbol for display
    pub fn symbol(self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
            Scale::Kelvin => "K",
            Scale::Reaumur => "°Ré",
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            Scale::Celsius => value,
            Scale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Scale::Kelvin => value + ABSOLUTE_ZERO_CELSIUS,
            Scale::Reaumur => value * 1.25,
        }
    }

    fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Scale::Celsius => celsius,
            Scale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            Scale::Kelvin => celsius - ABSOLUTE_ZERO_CELSIUS,
            Scale::Reaumur => celsius * 0.8,
        }
    }
}

/// Convert a temperature between scales
///
/// Temperatures below absolute zero are a domain error regardless of
/// the source scale.
///
/// # Example
/// ```
/// use formula_engine::formulas::temperature::{convert, Scale};
/// use formula_engine::numeric::Value;
///
/// let f = convert(&Value::from(100.0), Scale::Celsius, Scale::Fahrenheit).unwrap();
/// assert_eq!(f, 212.0);
/// ```
pub fn convert(value: &Value, from: Scale, to: Scale) -> FormulaResult<f64> {
    let v = validate_scalar(value, "value")?;
    let celsius = from.to_celsius(v);
    if celsius < ABSOLUTE_ZERO_CELSIUS {
        return Err(DomainError::new("temperature below absolute zero")
            .with_code("BELOW_ABSOLUTE_ZERO")
            .into());
    }
    Ok(to.from_celsius(celsius))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_fahrenheit_round_values() {
        assert_eq!(
            convert(&Value::Float(0.0), Scale::Celsius, Scale::Fahrenheit).unwrap(),
            32.0
        );
        assert_eq!(
            convert(&Value::Float(212.0), Scale::Fahrenheit, Scale::Celsius).unwrap(),
            100.0
        );
    }

    #[test]
    fn test_kelvin_pivot() {
        assert_eq!(
            convert(&Value::Float(0.0), Scale::Celsius, Scale::Kelvin).unwrap(),
            273.15
        );
        assert_eq!(
            convert(&Value::Float(0.0), Scale::Kelvin, Scale::Celsius).unwrap(),
            ABSOLUTE_ZERO_CELSIUS
        );
    }

    #[test]
    fn test_reaumur() {
        assert_eq!(
            convert(&Value::Float(100.0), Scale::Celsius, Scale::Reaumur).unwrap(),
            80.0
        );
        assert_eq!(
            convert(&Value::Float(80.0), Scale::Reaumur, Scale::Celsius).unwrap(),
            100.0
        );
    }

    #[test]
    fn test_same_scale_is_identity() {
        assert_eq!(
            convert(&Value::Float(37.5), Scale::Celsius, Scale::Celsius).unwrap(),
            37.5
        );
    }

    #[test]
    fn test_below_absolute_zero() {
        let err = convert(&Value::Float(-1.0), Scale::Kelvin, Scale::Celsius).unwrap_err();
        assert!(err.is_domain());

        let err = convert(&Value::Float(-300.0), Scale::Celsius, Scale::Kelvin).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn test_rejects_non_numeric_input() {
        let err = convert(&Value::from("warm"), Scale::Celsius, Scale::Kelvin).unwrap_err();
        assert!(err.is_validation());
    }
}
