use crate::{
    ast::{Expr, Position},
    error::Diagnostic,
    interpreter::{
        evaluator::{
            binary::scalar::overflow,
            core::{EvalResult, Interpreter},
        },
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates arithmetic negation of a value.
    ///
    /// Integers use checked negation, so `-(i64::MIN)` is an overflow.
    /// Strings and booleans cannot be negated; that is a type warning.
    ///
    /// # Parameters
    /// - `value`: The operand.
    /// - `position`: Location of the `-` token.
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
    /// assert_eq!(Interpreter::negate(&Value::Int(5), at), Ok(Value::Int(-5)));
    /// assert_eq!(Interpreter::negate(&Value::Float(0.5), at), Ok(Value::Float(-0.5)));
    /// assert!(Interpreter::negate(&Value::Bool(true), at).is_err());
    /// ```
    pub fn negate(value: &Value, position: Position) -> Result<Value, Diagnostic> {
        match value {
            Value::Int(n) => n.checked_neg().map(Value::Int).ok_or_else(|| overflow(position)),
            Value::Float(x) => Ok(Value::Float(-x)),
            Value::Str(_) | Value::Bool(_) => {
                Err(Diagnostic::warning("Operator '-' is only defined for 'int' and 'float'",
                                        position))
            },
        }
    }

    pub(crate) fn eval_negate(&mut self,
                              expr: &Expr,
                              position: Position)
                              -> EvalResult<Option<Value>> {
        Ok(match self.eval(expr)? {
            Some(value) => self.settle(Self::negate(&value, position)),
            None => None,
        })
    }

    /// `not expr`: the negated truthiness of the operand.
    pub(crate) fn eval_not(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        Ok(self.eval(expr)?.map(|value| Value::Bool(!value.is_truthy())))
    }

    /// `bool expr`: the truthiness of the operand. Booleans pass through
    /// unchanged.
    pub(crate) fn eval_truthy(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        Ok(self.eval(expr)?.map(|value| Value::Bool(value.is_truthy())))
    }
}
