// ============================================================================
// Formula Errors
// Typed error taxonomy for validation and formula evaluation
// ============================================================================

use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

// Errors are serialize-only: `expected` and `code` borrow 'static
// names, which no deserializer lifetime can satisfy, and nothing in
// the crate consumes errors back from the wire.
#[cfg(feature = "serde")]
use serde::Serialize;

/// Inline list of type names. Almost every validation error expects
/// one or two kinds, so two slots live on the stack.
pub type ExpectedKinds = SmallVec<[&'static str; 2]>;

// ============================================================================
// Validation Error
// ============================================================================

/// Input has the wrong type or shape.
///
/// Carries enough structure for callers to branch programmatically:
/// the expected type names (never empty), the kind that was actually
/// received, and the offending parameter name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ValidationError {
    /// Acceptable type names, e.g. `["int", "float"]`. Never empty.
    pub expected: ExpectedKinds,
    /// Kind of the value that was actually received
    pub actual: Option<String>,
    /// Name of the parameter that failed validation
    pub parameter: Option<String>,
}

impl ValidationError {
    /// Create a validation error for the given expected kinds
    ///
    /// `expected` must contain at least one type name.
    pub fn new<I>(expected: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        let expected: ExpectedKinds = expected.into_iter().collect();
        debug_assert!(!expected.is_empty(), "expected kinds must not be empty");
        Self {
            expected,
            actual: None,
            parameter: None,
        }
    }

    /// Attach the kind that was actually received
    pub fn with_actual(mut self, kind: impl Into<String>) -> Self {
        self.actual = Some(kind.into());
        self
    }

    /// Attach the name of the offending parameter
    pub fn with_parameter(mut self, name: impl Into<String>) -> Self {
        self.parameter = Some(name.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parameter) = &self.parameter {
            write!(f, "parameter `{}` ", parameter)?;
        }
        write!(f, "must be {}", self.expected.join(" or "))?;
        if let Some(actual) = &self.actual {
            write!(f, " (received: {})", actual)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// Domain Error
// ============================================================================

/// Input is type-correct but violates a precondition of the formula
/// (negative mass, pressure out of physical range, mismatched
/// sequence lengths).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DomainError {
    /// Human-readable description of the violated precondition
    pub message: String,
    /// Optional stable code for programmatic identification
    pub code: Option<&'static str>,
}

impl DomainError {
    /// Create a domain error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Attach a stable error code
    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for DomainError {}

// ============================================================================
// Division-by-Zero Error
// ============================================================================

/// Attempted division by zero.
///
/// Distinguished from [`DomainError`] because callers often want to
/// retry with a different denominator rather than treat it as fatal.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DivisionByZeroError {
    /// Name of the operation that attempted the division
    pub operation: Option<String>,
    /// The dividend that would have been divided
    pub dividend: Option<f64>,
}

impl DivisionByZeroError {
    /// Create a division-by-zero error with no context attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the name of the operation
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Attach the dividend
    pub fn with_dividend(mut self, dividend: f64) -> Self {
        self.dividend = Some(dividend);
        self
    }
}

impl fmt::Display for DivisionByZeroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "division by zero")?;
        if let Some(operation) = &self.operation {
            write!(f, " in operation {}", operation)?;
        }
        if let Some(dividend) = self.dividend {
            write!(f, " (dividend: {})", dividend)?;
        }
        Ok(())
    }
}

impl std::error::Error for DivisionByZeroError {}

// ============================================================================
// Aggregate Error
// ============================================================================

/// Closed error taxonomy for every formula and for the dispatcher.
///
/// All public operations in this crate return [`FormulaResult`];
/// errors are constructed as data and handed back to the immediate
/// caller. The library never panics, retries, or swallows an error.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum FormulaError {
    /// Wrong input type or shape
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Value outside the formula's valid domain
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Division by zero
    #[error(transparent)]
    DivisionByZero(#[from] DivisionByZeroError),
}

impl FormulaError {
    /// True if this is a validation (type/shape) error
    pub fn is_validation(&self) -> bool {
        matches!(self, FormulaError::Validation(_))
    }

    /// True if this is a domain error
    pub fn is_domain(&self) -> bool {
        matches!(self, FormulaError::Domain(_))
    }

    /// True if this is a division-by-zero error
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, FormulaError::DivisionByZero(_))
    }
}

/// Result type alias for formula evaluation
pub type FormulaResult<T> = Result<T, FormulaError>;
