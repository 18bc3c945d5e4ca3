use log::trace;

use crate::{
    ast::{Expr, Position, Statement},
    interpreter::evaluator::core::{EvalResult, Interpreter},
};

impl Interpreter<'_> {
    /// Evaluates a condition of `if` or `while`.
    ///
    /// Booleans are used as they are, other values through truthiness. An
    /// absent condition counts as false.
    fn condition_holds(&mut self, condition: &Expr) -> EvalResult<bool> {
        Ok(self.eval(condition)?.is_some_and(|value| value.is_truthy()))
    }

    /// Runs a block body under its own execution gate frame.
    ///
    /// The frame is `enabled` when the enclosing gate is open and `false`
    /// otherwise. It is popped again before returning, also when a statement
    /// fails with a fatal error.
    fn run_block(&mut self, body: &[Statement], enabled: bool) -> EvalResult<()> {
        let active = self.gate.is_active();
        self.gate.push(active && enabled);

        let result = body.iter()
                         .try_for_each(|statement| self.execute_statement(statement));

        self.gate.pop();
        result
    }

    /// Executes `if (condition) { ... } else { ... }`.
    ///
    /// The condition is evaluated once. The then-block runs under a frame
    /// holding the condition, the else-block under one holding its negation.
    pub(crate) fn execute_if(&mut self,
                             condition: &Expr,
                             then_branch: &[Statement],
                             else_branch: Option<&[Statement]>)
                             -> EvalResult<()> {
        let holds = self.condition_holds(condition)?;

        self.run_block(then_branch, holds)?;
        if let Some(else_branch) = else_branch {
            self.run_block(else_branch, !holds)?;
        }
        Ok(())
    }

    /// Executes `while (condition) { ... }`.
    ///
    /// The condition is evaluated afresh before every iteration; the loop
    /// ends the first time it does not hold.
    pub(crate) fn execute_while(&mut self,
                                condition: &Expr,
                                body: &[Statement],
                                position: Position)
                                -> EvalResult<()> {
        let mut iterations: usize = 0;

        while self.gate.is_active() {
            let holds = self.condition_holds(condition)?;
            self.run_block(body, holds)?;
            if !holds {
                break;
            }
            iterations += 1;
        }

        trace!("Loop on line {} ran {iterations} iterations", position.line);
        Ok(())
    }
}
