use crate::{
    ast::{Builtin, Expr, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            function::builtin::{len, to_float, to_int, to_str},
        },
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a one-argument builtin call.
    ///
    /// An absent argument makes the call absent and leaves the runtime error
    /// register untouched. `to_int` and `to_float` record their outcome in
    /// the register: `1` when the conversion failed, `0` when it succeeded.
    /// A failed conversion reports nothing; `err()` is the only way to see
    /// it.
    pub(crate) fn eval_call(&mut self,
                            builtin: Builtin,
                            argument: &Expr,
                            position: Position)
                            -> EvalResult<Option<Value>> {
        let Some(argument) = self.eval(argument)? else {
            return Ok(None);
        };

        Ok(match builtin {
            Builtin::Len => self.settle(len(&argument, position)),
            Builtin::ToStr => Some(to_str(&argument)),
            Builtin::ToInt => self.record_conversion(to_int(&argument)),
            Builtin::ToFloat => self.record_conversion(to_float(&argument)),
        })
    }

    fn record_conversion(&mut self, converted: Option<Value>) -> Option<Value> {
        self.error_register = i64::from(converted.is_none());
        converted
    }

    /// Evaluates `input()` or `input(prompt)`.
    ///
    /// The prompt's text form is written and flushed before one line is read
    /// from the input source. An absent prompt writes nothing but the line is
    /// still read. The line terminator (`\n` or `\r\n`) is removed; at the end
    /// of input the result is the empty string.
    ///
    /// # Errors
    /// Returns a `RuntimeError` when writing the prompt or reading the line
    /// fails.
    pub(crate) fn eval_input(&mut self,
                             prompt: Option<&Expr>,
                             position: Position)
                             -> EvalResult<Option<Value>> {
        let line = position.line;

        if let Some(prompt) = prompt
           && let Some(text) = self.eval(prompt)?
        {
            write!(self.output, "{text}").and_then(|()| self.output.flush())
                                         .map_err(|source| RuntimeError::Output { source, line })?;
        }

        let mut buffer = String::new();
        self.input
            .read_line(&mut buffer)
            .map_err(|source| RuntimeError::Input { source, line })?;

        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }

        Ok(Some(Value::Str(buffer)))
    }
}
