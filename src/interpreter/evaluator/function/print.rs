use crate::{
    ast::{Expr, Position},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Interpreter},
};

impl Interpreter<'_> {
    /// Executes `print(arg, ...)`.
    ///
    /// Arguments are evaluated left to right and their text forms are
    /// concatenated without a separator. Absent arguments contribute nothing,
    /// but the line is still written.
    ///
    /// # Errors
    /// Returns `RuntimeError::Output` if the line cannot be written.
    pub(crate) fn execute_print(&mut self,
                                arguments: &[Expr],
                                position: Position)
                                -> EvalResult<()> {
        let mut line = String::new();
        for argument in arguments {
            if let Some(value) = self.eval(argument)? {
                line.push_str(&value.to_string());
            }
        }

        writeln!(self.output, "{line}").map_err(|source| RuntimeError::Output { source,
                                                                                line: position.line })
    }
}
