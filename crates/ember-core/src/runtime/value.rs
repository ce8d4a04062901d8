//! Ember value representation.

use std::fmt;

/// A constant-pool value.
///
/// Only numbers exist today. The enum is tagged from the start so booleans,
/// nil and heap objects can be added without reshaping the constant pool.
#[derive(Debug, Clone, Copy)]
pub enum Value {
    /// Number (IEEE 754 double)
    Number(f64),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // NaN never equals anything, itself included.
            (Value::Number(a), Value::Number(b)) => a == b,
        }
    }
}

impl Value {
    /// Returns true if this value is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns the numeric payload, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
        }
    }

    /// Returns the type of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Number(0.0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(-0.125).to_string(), "-0.125");
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        let nan = Value::Number(f64::NAN);
        assert_ne!(nan, nan);
        assert_eq!(Value::from(1.0), Value::Number(1.0));
    }

    #[test]
    fn test_accessors() {
        let value = Value::Number(4.0);
        assert!(value.is_number());
        assert_eq!(value.as_number(), Some(4.0));
        assert_eq!(value.type_name(), "number");
    }
}
