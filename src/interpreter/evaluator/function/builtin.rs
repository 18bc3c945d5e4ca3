use crate::{
    ast::Position,
    error::Diagnostic,
    interpreter::value::core::Value,
    util::num::{f64_to_i64_truncated, i64_to_f64, usize_to_i64},
};

/// Returns the number of characters in a string.
///
/// # Example
/// ```
/// use juicy::{
///     ast::Position,
///     interpreter::{evaluator::function::builtin::len, value::core::Value},
/// };
///
/// let at = Position::new(1, 1);
///
/// assert_eq!(len(&Value::from("añb"), at), Ok(Value::Int(3)));
/// assert_eq!(len(&Value::Int(7), at).unwrap_err().message, "'len' only accepts string");
/// ```
pub fn len(value: &Value, position: Position) -> Result<Value, Diagnostic> {
    match value {
        Value::Str(s) => Ok(Value::Int(usize_to_i64(s.chars().count()))),
        _ => Err(Diagnostic::error("'len' only accepts string", position)),
    }
}

/// Returns the text form of any value, as `print` would write it.
///
/// # Example
/// ```
/// use juicy::interpreter::{evaluator::function::builtin::to_str, value::core::Value};
///
/// assert_eq!(to_str(&Value::Float(3.0)), Value::from("3.0"));
/// assert_eq!(to_str(&Value::Bool(false)), Value::from("False"));
/// ```
#[must_use]
pub fn to_str(value: &Value) -> Value {
    Value::Str(value.to_string())
}

/// Converts a value to an integer.
///
/// Strings are parsed after trimming surrounding whitespace. Floats are
/// truncated toward zero. Booleans become `0` or `1`.
///
/// # Returns
/// `None` when the conversion fails: a string that is not an integer, or a
/// float that is not finite or out of range.
///
/// # Example
/// ```
/// use juicy::interpreter::{evaluator::function::builtin::to_int, value::core::Value};
///
/// assert_eq!(to_int(&Value::from(" 42 ")), Some(Value::Int(42)));
/// assert_eq!(to_int(&Value::Float(-2.9)), Some(Value::Int(-2)));
/// assert_eq!(to_int(&Value::from("abc")), None);
/// assert_eq!(to_int(&Value::from("1.5")), None);
/// ```
#[must_use]
pub fn to_int(value: &Value) -> Option<Value> {
    match value {
        Value::Int(n) => Some(Value::Int(*n)),
        Value::Float(x) => f64_to_i64_truncated(*x).map(Value::Int),
        Value::Str(s) => s.trim().parse::<i64>().ok().map(Value::Int),
        Value::Bool(b) => Some(Value::Int(i64::from(*b))),
    }
}

/// Converts a value to a float.
///
/// Strings are parsed after trimming surrounding whitespace and accept the
/// usual decimal and exponent forms as well as `inf` and `nan`.
///
/// # Returns
/// `None` when a string does not hold a number.
///
/// # Example
/// ```
/// use juicy::interpreter::{evaluator::function::builtin::to_float, value::core::Value};
///
/// assert_eq!(to_float(&Value::from("2.5")), Some(Value::Float(2.5)));
/// assert_eq!(to_float(&Value::Int(2)), Some(Value::Float(2.0)));
/// assert_eq!(to_float(&Value::from("two")), None);
/// ```
#[must_use]
pub fn to_float(value: &Value) -> Option<Value> {
    match value {
        Value::Int(n) => Some(Value::Float(i64_to_f64(*n))),
        Value::Float(x) => Some(Value::Float(*x)),
        Value::Str(s) => s.trim().parse::<f64>().ok().map(Value::Float),
        Value::Bool(b) => Some(Value::Float(if *b { 1.0 } else { 0.0 })),
    }
}
