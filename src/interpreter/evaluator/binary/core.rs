use crate::{
    ast::{BinaryOperator, Expr, Position},
    error::Diagnostic,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates both operands of an arithmetic node and combines them.
    ///
    /// The left operand is evaluated first. Both are always evaluated, even
    /// when the left one is absent; an absent operand makes the result absent
    /// without a further diagnostic.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 position: Position)
                                 -> EvalResult<Option<Value>> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;

        Ok(match (left, right) {
            (Some(left), Some(right)) => self.settle(Self::eval_binary(op, &left, &right, position)),
            _ => None,
        })
    }

    /// Evaluates a binary operation between two values.
    ///
    /// `+` concatenates two strings and adds two numbers. Every other
    /// operator is numeric only and goes to `eval_scalar_op`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Location of the operator, used for diagnostics.
    ///
    /// # Returns
    /// The computed value, or the diagnostic describing why there is none.
    /// Operand type mismatches are warnings; overflow and division by zero
    /// are errors.
    ///
    /// # Example
    /// ```
    /// use juicy::{
    ///     ast::{BinaryOperator, Position},
    ///     error::Severity,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let at = Position::new(1, 3);
    ///
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add, &Value::Int(3), &Value::Float(0.5), at);
    /// assert_eq!(sum, Ok(Value::Float(3.5)));
    ///
    /// let joined = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                       &Value::from("ab"),
    ///                                       &Value::from("c"),
    ///                                       at);
    /// assert_eq!(joined, Ok(Value::from("abc")));
    ///
    /// let mismatch = Interpreter::eval_binary(BinaryOperator::Mul,
    ///                                         &Value::from("ab"),
    ///                                         &Value::Int(2),
    ///                                         at).unwrap_err();
    /// assert_eq!(mismatch.severity, Severity::Warning);
    /// assert_eq!(mismatch.message, "Operator '*' is only defined for 'int' and 'float'");
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: Position)
                       -> Result<Value, Diagnostic> {
        use BinaryOperator::Add;

        match (op, left, right) {
            (Add, Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
            (Add, ..) if !(left.is_numeric() && right.is_numeric()) => {
                Err(Diagnostic::warning(format!("Operator '+' is not defined for '{}' and '{}'",
                                                left.type_name(),
                                                right.type_name()),
                                        position))
            },
            _ => Self::eval_scalar_op(op, left, right, position),
        }
    }
}
