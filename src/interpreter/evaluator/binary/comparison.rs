use crate::{
    ast::{ComparisonLink, ComparisonOperator, Expr, Position},
    error::Diagnostic,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// Applies `op` to two numeric values, promoting an integer to float only
/// when the other side is a float.
fn numeric_holds(op: ComparisonOperator, left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => op.holds(a, b),
        _ => match (left.as_float(), right.as_float()) {
            (Some(a), Some(b)) => op.holds(&a, &b),
            _ => false,
        },
    }
}

impl Interpreter<'_> {
    /// Evaluates a comparison chain and converts its outcome to a boolean.
    ///
    /// Every operand is evaluated, left to right, even after a step has
    /// failed. The result is `false` only when the final step left exactly
    /// `Bool(false)` behind.
    pub(crate) fn eval_comparison(&mut self,
                                  first: &Expr,
                                  links: &[ComparisonLink])
                                  -> EvalResult<Option<Value>> {
        let mut carried = self.eval(first)?;

        for link in links {
            let right = self.eval(&link.right)?;
            carried = match (carried, right) {
                (Some(left), Some(right)) => {
                    self.settle(Self::compare_step(link.op, &left, right, link.position))
                },
                _ => None,
            };
        }

        Ok(carried.map(|outcome| Value::Bool(!outcome.is_false_marker())))
    }

    /// Evaluates one step of a comparison chain.
    ///
    /// A left operand of exactly `Bool(false)` means an earlier step already
    /// failed, so the step yields `Bool(false)` without looking at types.
    /// Otherwise both operands must be numeric. When the relation holds the
    /// step yields the right operand itself, so that the next step can
    /// compare against it.
    ///
    /// # Parameters
    /// - `op`: The relational operator.
    /// - `left`: The carried value, or the first operand of the chain.
    /// - `right`: The step's right operand.
    /// - `position`: Location of the operator.
    ///
    /// # Returns
    /// The carried value for the next step, or an error diagnostic for
    /// non-numeric operands.
    ///
    /// # Example
    /// ```
    /// use juicy::{
    ///     ast::{ComparisonOperator, Position},
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let at = Position::new(1, 3);
    ///
    /// let holds = Interpreter::compare_step(ComparisonOperator::Less,
    ///                                       &Value::Int(1),
    ///                                       Value::Float(2.5),
    ///                                       at);
    /// assert_eq!(holds, Ok(Value::Float(2.5)));
    ///
    /// let fails = Interpreter::compare_step(ComparisonOperator::Less,
    ///                                       &Value::Int(3),
    ///                                       Value::Int(2),
    ///                                       at);
    /// assert_eq!(fails, Ok(Value::Bool(false)));
    ///
    /// let skipped = Interpreter::compare_step(ComparisonOperator::Less,
    ///                                         &Value::Bool(false),
    ///                                         Value::from("x"),
    ///                                         at);
    /// assert_eq!(skipped, Ok(Value::Bool(false)));
    ///
    /// let invalid = Interpreter::compare_step(ComparisonOperator::Less,
    ///                                         &Value::Int(1),
    ///                                         Value::from("x"),
    ///                                         at);
    /// assert_eq!(invalid.unwrap_err().message, "Non-numerical expressions are not comparable");
    /// ```
    pub fn compare_step(op: ComparisonOperator,
                        left: &Value,
                        right: Value,
                        position: Position)
                        -> Result<Value, Diagnostic> {
        if left.is_false_marker() {
            return Ok(Value::Bool(false));
        }

        if !(left.is_numeric() && right.is_numeric()) {
            return Err(Diagnostic::error("Non-numerical expressions are not comparable", position));
        }

        Ok(if numeric_holds(op, left, &right) {
               right
           } else {
               Value::Bool(false)
           })
    }
}
