use std::fmt;

use crate::{
    ast::LiteralValue,
    util::num::{format_float, i64_to_f64},
};

/// Represents a runtime value in the interpreter.
///
/// Values are immutable; every operator produces a new one. A failed
/// evaluation is not a `Value` at all: the evaluator returns `None` ("absent")
/// instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A double precision float.
    Float(f64),
    /// A string of Unicode characters.
    Str(String),
    /// A boolean. Produced by comparisons, `and`/`or`/`not`, `bool` and the
    /// `true`/`false` literals.
    Bool(bool),
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Int(*n),
            LiteralValue::Float(x) => Self::Float(*x),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
        }
    }
}

impl Value {
    /// The name used for this value's type in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Bool(_) => "bool",
        }
    }

    /// Returns `true` for `Int` and `Float`.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Converts a numeric value to `f64`, promoting integers.
    ///
    /// # Returns
    /// - `Some(f64)` for `Int` and `Float`.
    /// - `None` for strings and booleans.
    ///
    /// # Example
    /// ```
    /// use juicy::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Int(2).as_float(), Some(2.0));
    /// assert_eq!(Value::from("2").as_float(), None);
    /// ```
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(i64_to_f64(*n)),
            Self::Float(x) => Some(*x),
            Self::Str(_) | Self::Bool(_) => None,
        }
    }

    /// Converts the value to a boolean.
    ///
    /// Strings are truthy when non-empty, numbers when non-zero and booleans
    /// are themselves.
    ///
    /// # Example
    /// ```
    /// use juicy::interpreter::value::core::Value;
    ///
    /// assert!(Value::from("x").is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::Int(0).is_truthy());
    /// assert!(Value::Float(0.5).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Int(n) => *n != 0,
            Self::Float(x) => *x != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
        }
    }

    /// Returns `true` only for `Bool(false)`, the marker a failed comparison
    /// step leaves in a chain.
    #[must_use]
    pub const fn is_false_marker(&self) -> bool {
        matches!(self, Self::Bool(false))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{}", format_float(*x)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
        }
    }
}
