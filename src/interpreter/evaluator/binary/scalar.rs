use crate::{
    ast::{BinaryOperator, Position},
    error::Diagnostic,
    interpreter::{evaluator::core::Interpreter, value::core::Value},
};

/// Diagnostic for an integer result that does not fit in 64 bits.
pub(crate) fn overflow(position: Position) -> Diagnostic {
    Diagnostic::error("Integer overflow", position)
}

/// Diagnostic for a zero divisor.
pub(crate) fn division_by_zero(position: Position) -> Diagnostic {
    Diagnostic::error("Division by zero", position)
}

impl Interpreter<'_> {
    /// Evaluates an arithmetic operation between two numbers.
    ///
    /// Two integers stay integral for `+`, `-` and `*`, using checked
    /// arithmetic. A float operand promotes the other one. `/` is true
    /// division and always produces a float; a zero divisor is an error for
    /// both numeric types. `^` goes to `eval_pow`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Location of the operator.
    ///
    /// # Returns
    /// The computed scalar. A warning when either operand is not numeric, an
    /// error on overflow or division by zero.
    ///
    /// # Example
    /// ```
    /// use juicy::{
    ///     ast::{BinaryOperator, Position},
    ///     error::Severity,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let at = Position::new(1, 1);
    ///
    /// let half = Interpreter::eval_scalar_op(BinaryOperator::Div, &Value::Int(7), &Value::Int(2), at);
    /// assert_eq!(half, Ok(Value::Float(3.5)));
    ///
    /// let zero = Interpreter::eval_scalar_op(BinaryOperator::Div, &Value::Int(1), &Value::Int(0), at);
    /// assert_eq!(zero.unwrap_err().message, "Division by zero");
    ///
    /// let big = Interpreter::eval_scalar_op(BinaryOperator::Mul,
    ///                                       &Value::Int(i64::MAX),
    ///                                       &Value::Int(2),
    ///                                       at);
    /// assert_eq!(big.unwrap_err().message, "Integer overflow");
    ///
    /// let cube = Interpreter::eval_scalar_op(BinaryOperator::Pow, &Value::Int(2), &Value::Int(3), at);
    /// assert_eq!(cube, Ok(Value::Int(8)));
    ///
    /// let text = Interpreter::eval_scalar_op(BinaryOperator::Sub, &Value::Bool(true), &Value::Int(1), at);
    /// assert_eq!(text.unwrap_err().severity, Severity::Warning);
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          position: Position)
                          -> Result<Value, Diagnostic> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        let (Some(x), Some(y)) = (left.as_float(), right.as_float()) else {
            return Err(Diagnostic::warning(format!("Operator '{op}' is only defined for 'int' and 'float'"),
                                           position));
        };

        let checked = |result: Option<i64>| result.map(Value::Int).ok_or_else(|| overflow(position));

        match (op, left, right) {
            (Pow, ..) => Self::eval_pow(left, right, position),
            (Add, Value::Int(a), Value::Int(b)) => checked(a.checked_add(*b)),
            (Sub, Value::Int(a), Value::Int(b)) => checked(a.checked_sub(*b)),
            (Mul, Value::Int(a), Value::Int(b)) => checked(a.checked_mul(*b)),
            (Add, ..) => Ok(Value::Float(x + y)),
            (Sub, ..) => Ok(Value::Float(x - y)),
            (Mul, ..) => Ok(Value::Float(x * y)),
            (Div, ..) if y == 0.0 => Err(division_by_zero(position)),
            (Div, ..) => Ok(Value::Float(x / y)),
        }
    }
}
