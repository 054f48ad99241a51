// ============================================================================
// Special Numbers
// Number-theory classification predicates over integers
// ============================================================================

use crate::numeric::{validate_integer, DomainError, FormulaResult, Value};

/// Count the decimal digits of `n` (zero has one digit)
fn digit_count(n: u64) -> u32 {
    if n == 0 {
        return 1;
    }
    n.ilog10() + 1
}

/// Armstrong number check
///
/// A number equals the sum of its digits each raised to the number of
/// digits: 153 = 1³ + 5³ + 3³. The sign is ignored, matching the
/// usual definition over magnitudes.
///
/// # Example
/// ```
/// use formula_engine::formulas::special_numbers::is_armstrong;
/// use formula_engine::numeric::Value;
///
/// assert!(is_armstrong(&Value::from(153)).unwrap());
/// assert!(!is_armstrong(&Value::from(154)).unwrap());
/// ```
pub fn is_armstrong(number: &Value) -> FormulaResult<bool> {
    let n = validate_integer(number, "number")?;
    let target = n.unsigned_abs();
    let digits = digit_count(target);

    let mut sum: u128 = 0;
    let mut rest = target;
    loop {
        sum += u128::from(rest % 10).pow(digits);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    Ok(sum == u128::from(target))
}

/// Automorphic number check
///
/// A number whose square ends in the number itself: 5² = 25, 76² =
/// 5776. Negative numbers are never automorphic.
pub fn is_automorphic(number: &Value) -> FormulaResult<bool> {
    let n = validate_integer(number, "number")?;
    if n < 0 {
        return Ok(false);
    }

    let square = i128::from(n) * i128::from(n);
    let mut modulus: i128 = 1;
    for _ in 0..digit_count(n.unsigned_abs()) {
        modulus *= 10;
    }
    Ok(square % modulus == i128::from(n))
}

/// Pronic number check
///
/// A product of two consecutive integers: 6 = 2·3, 12 = 3·4.
/// Negative numbers are never pronic.
pub fn is_pronic(number: &Value) -> FormulaResult<bool> {
    let n = validate_integer(number, "number")?;
    if n < 0 {
        return Ok(false);
    }

    // Integer sqrt estimate, corrected for float rounding near the root
    let root = (n as f64).sqrt() as i64;
    for candidate in root.saturating_sub(1)..=root + 1 {
        if candidate >= 0 && i128::from(candidate) * i128::from(candidate + 1) == i128::from(n) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// The n-th triangular number: n·(n+1)/2
///
/// Defined for n ≥ 0; results that overflow i64 are a domain error.
pub fn triangular_number(number: &Value) -> FormulaResult<i64> {
    let n = validate_integer(number, "number")?;
    if n < 0 {
        return Err(DomainError::new("number cannot be negative")
            .with_code("NEGATIVE_INDEX")
            .into());
    }

    n.checked_add(1)
        .and_then(|next| n.checked_mul(next))
        .map(|product| product / 2)
        .ok_or_else(|| {
            DomainError::new("triangular number exceeds representable range")
                .with_code("OVERFLOW")
                .into()
        })
}
