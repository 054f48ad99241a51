// ============================================================================
// Dynamic Value
// Loosely typed input representation for formula arguments
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A loosely typed formula argument.
///
/// Formulas accept `Value` rather than `f64` so that type validation
/// is an observable step: a caller can hand in a string or a boolean
/// and get a structured [`ValidationError`](crate::numeric::ValidationError)
/// back instead of a compile error. Booleans are deliberately not
/// numeric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Signed integer, widened to f64 during validation
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// Boolean. Never treated as a number.
    Bool(bool),
    /// Text
    Text(String),
    /// Ordered sequence of values, insertion order significant
    List(Vec<Value>),
    /// Absent value
    Null,
}

impl Value {
    /// Short type name used in validation errors
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Text(_) => "str",
            Value::List(_) => "list",
            Value::Null => "null",
        }
    }

    /// True for `Int` and `Float`
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// True for `List`
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Build a list value from anything convertible to `Value`
    ///
    /// # Example
    /// ```
    /// use formula_engine::numeric::Value;
    ///
    /// let distances = Value::list([100, 200, 300]);
    /// assert!(distances.is_list());
    /// ```
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Int(1).kind(), "int");
        assert_eq!(Value::Float(1.5).kind(), "float");
        assert_eq!(Value::Bool(true).kind(), "bool");
        assert_eq!(Value::from("12").kind(), "str");
        assert_eq!(Value::list([1, 2]).kind(), "list");
        assert_eq!(Value::Null.kind(), "null");
    }

    #[test]
    fn test_numeric_classification() {
        assert!(Value::Int(3).is_numeric());
        assert!(Value::Float(3.0).is_numeric());
        assert!(!Value::Bool(true).is_numeric());
        assert!(!Value::list([1]).is_numeric());
    }

    #[test]
    fn test_list_builder_mixes_conversions() {
        let list = Value::list([Value::Int(1), Value::Float(2.5)]);
        assert_eq!(
            list,
            Value::List(vec![Value::Int(1), Value::Float(2.5)])
        );
    }
}
