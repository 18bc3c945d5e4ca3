use crate::{
    ast::{Expr, Position},
    error::Diagnostic,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::usize_to_i64,
};

/// Resolves optional slice bounds against a string of `len` characters.
///
/// Negative bounds count from the end. Both bounds are then clamped to
/// `0..=len`, and a start past the end gives an empty range.
///
/// # Returns
/// The `(start, end)` character range to take.
///
/// # Example
/// ```
/// use juicy::interpreter::evaluator::string::slice_bounds;
///
/// assert_eq!(slice_bounds(5, Some(1), Some(3)), (1, 3));
/// assert_eq!(slice_bounds(5, Some(-2), None), (3, 5));
/// assert_eq!(slice_bounds(5, None, Some(99)), (0, 5));
/// assert_eq!(slice_bounds(5, Some(4), Some(2)), (4, 4));
/// ```
#[must_use]
pub fn slice_bounds(len: usize, start: Option<i64>, end: Option<i64>) -> (usize, usize) {
    let resolve = |bound: i64| -> usize {
        let bound = if bound < 0 {
            bound.saturating_add(usize_to_i64(len))
        } else {
            bound
        };
        usize::try_from(bound.max(0)).map_or(len, |bound| bound.min(len))
    };

    let start = start.map_or(0, resolve);
    let end = end.map_or(len, resolve).max(start);
    (start, end)
}

/// Returns the character at `index`, counting from zero.
///
/// # Example
/// ```
/// use juicy::{
///     ast::Position,
///     interpreter::{evaluator::string::char_at, value::core::Value},
/// };
///
/// let at = Position::new(1, 2);
///
/// assert_eq!(char_at("héllo", 1, at), Ok(Value::from("é")));
/// assert_eq!(char_at("abc", 3, at).unwrap_err().message, "Index is out of range");
/// assert_eq!(char_at("abc", -1, at).unwrap_err().message, "Index is out of range");
/// ```
pub fn char_at(text: &str, index: i64, position: Position) -> Result<Value, Diagnostic> {
    usize::try_from(index).ok()
                          .and_then(|index| text.chars().nth(index))
                          .map(|c| Value::Str(c.to_string()))
                          .ok_or_else(|| Diagnostic::error("Index is out of range", position))
}

/// Reads an index or slice bound, which must be an integer.
fn integer_index(value: &Value, position: Position) -> Result<i64, Diagnostic> {
    match value {
        Value::Int(n) => Ok(*n),
        _ => Err(Diagnostic::error("Index is not 'int'", position)),
    }
}

impl Interpreter<'_> {
    /// Evaluates `target[index]`.
    ///
    /// The target is evaluated before the index. Only strings can be indexed
    /// and the index must be an integer in `0..len`.
    pub(crate) fn eval_index(&mut self,
                             target: &Expr,
                             index: &Expr,
                             position: Position)
                             -> EvalResult<Option<Value>> {
        let base = self.eval(target)?;
        let offset = self.eval(index)?;

        let (Some(base), Some(offset)) = (base, offset) else {
            return Ok(None);
        };

        let outcome = match &base {
            Value::Str(text) => integer_index(&offset, index.position()).and_then(|offset| {
                                                                           char_at(text,
                                                                                   offset,
                                                                                   position)
                                                                       }),
            _ => Err(Diagnostic::error("Value is not indexable", position)),
        };
        Ok(self.settle(outcome))
    }

    /// Evaluates `target[start:end]`.
    ///
    /// Operands are evaluated left to right. Omitted bounds default to the
    /// start and end of the string. Bounds out of range are clamped rather
    /// than reported.
    pub(crate) fn eval_slice(&mut self,
                             target: &Expr,
                             start: Option<&Expr>,
                             end: Option<&Expr>,
                             position: Position)
                             -> EvalResult<Option<Value>> {
        let Some(base) = self.eval(target)? else {
            self.eval_bounds(start, end)?;
            return Ok(None);
        };
        let Some((start_value, end_value)) = self.eval_bounds(start, end)? else {
            return Ok(None);
        };

        let Value::Str(text) = &base else {
            self.report(Diagnostic::error("Value is not subscriptable", position));
            return Ok(None);
        };

        let resolve = |bound: Option<(Value, Position)>| -> Result<Option<i64>, Diagnostic> {
            bound.map(|(value, at)| integer_index(&value, at)).transpose()
        };
        let bounds = resolve(start_value).and_then(|s| resolve(end_value).map(|e| (s, e)));

        let outcome = bounds.map(|(start, end)| {
                                let (from, to) = slice_bounds(text.chars().count(), start, end);
                                Value::Str(text.chars().skip(from).take(to - from).collect())
                            });
        Ok(self.settle(outcome))
    }

    /// Evaluates the optional bounds of a slice, keeping the location of
    /// each for diagnostics.
    ///
    /// # Returns
    /// `None` when a present bound is absent.
    #[allow(clippy::type_complexity)]
    fn eval_bounds(&mut self,
                   start: Option<&Expr>,
                   end: Option<&Expr>)
                   -> EvalResult<Option<(Option<(Value, Position)>, Option<(Value, Position)>)>> {
        let mut bounds = [None, None];
        let mut absent = false;

        for (slot, bound) in bounds.iter_mut().zip([start, end]) {
            if let Some(expr) = bound {
                match self.eval(expr)? {
                    Some(value) => *slot = Some((value, expr.position())),
                    None => absent = true,
                }
            }
        }

        let [start, end] = bounds;
        Ok(if absent { None } else { Some((start, end)) })
    }
}
