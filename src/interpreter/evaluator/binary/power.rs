use crate::{
    ast::Position,
    error::Diagnostic,
    interpreter::{
        evaluator::{
            binary::scalar::{division_by_zero, overflow},
            core::Interpreter,
        },
        value::core::Value,
    },
};

/// Raises an integer to a non-negative integer power with overflow checks.
///
/// Exponents beyond `u32` still work for the bases `0`, `1` and `-1`.
fn checked_int_pow(base: i64, exponent: i64) -> Option<i64> {
    if let Ok(exponent) = u32::try_from(exponent) {
        return base.checked_pow(exponent);
    }

    match base {
        0 | 1 => Some(base),
        -1 => Some(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => None,
    }
}

impl Interpreter<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer–integer exponentiation with a non-negative exponent uses
    /// checked arithmetic and stays integral. A negative integer exponent is
    /// computed in floating-point form; raising integer zero to a negative
    /// power is a division by zero. In all other cases both operands are
    /// promoted to floats and evaluated with `powf`.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `position`: Location of the `^` operator.
    ///
    /// # Returns
    /// The value of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use juicy::{
    ///     ast::Position,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let at = Position::new(1, 1);
    ///
    /// assert_eq!(Interpreter::eval_pow(&Value::Int(2), &Value::Int(10), at),
    ///            Ok(Value::Int(1024)));
    /// assert_eq!(Interpreter::eval_pow(&Value::Int(2), &Value::Int(-1), at),
    ///            Ok(Value::Float(0.5)));
    /// assert_eq!(Interpreter::eval_pow(&Value::Float(9.0), &Value::Float(0.5), at),
    ///            Ok(Value::Float(3.0)));
    /// assert!(Interpreter::eval_pow(&Value::from("2"), &Value::Int(1), at).is_err());
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value, position: Position) -> Result<Value, Diagnostic> {
        match (base, exponent) {
            (Value::Int(b), Value::Int(e)) if *e >= 0 => {
                checked_int_pow(*b, *e).map(Value::Int)
                                       .ok_or_else(|| overflow(position))
            },
            (Value::Int(0), Value::Int(_)) => Err(division_by_zero(position)),
            _ => match (base.as_float(), exponent.as_float()) {
                (Some(b), Some(e)) => Ok(Value::Float(b.powf(e))),
                _ => {
                    Err(Diagnostic::warning("Operator '^' is only defined for 'int' and 'float'",
                                            position))
                },
            },
        }
    }
}
