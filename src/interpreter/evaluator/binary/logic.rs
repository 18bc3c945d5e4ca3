use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates `left and right` or `left or right`.
    ///
    /// There is no short-circuit: both operands are evaluated, left first, so
    /// the side effects of the right operand always happen. The parser only
    /// admits boolean operands; the values are still read through
    /// truthiness.
    ///
    /// # Returns
    /// A boolean, or `None` if either operand is absent.
    pub(crate) fn eval_logical(&mut self,
                               left: &Expr,
                               op: LogicalOperator,
                               right: &Expr)
                               -> EvalResult<Option<Value>> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;

        let (Some(left), Some(right)) = (left, right) else {
            return Ok(None);
        };

        let result = match op {
            LogicalOperator::And => left.is_truthy() && right.is_truthy(),
            LogicalOperator::Or => left.is_truthy() || right.is_truthy(),
        };
        Ok(Some(Value::Bool(result)))
    }
}
