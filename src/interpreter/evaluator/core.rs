use std::{
    collections::HashMap,
    io::{BufRead, Write},
};

use log::debug;

use crate::{
    ast::{Expr, Position, Program, Statement},
    error::{Diagnostic, DiagnosticSink, ParseError, RuntimeError},
    interpreter::{
        evaluator::gate::ExecutionGate, lexer::tokenize, parser::core::parse_program,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// Evaluation functions return `Ok(Some(value))` for a produced value,
/// `Ok(None)` for an absent one (a diagnostic was already reported, or the
/// execution gate is closed) and `Err` only for fatal I/O failures.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime state of one program run.
///
/// The interpreter owns the global variables, the runtime error register and
/// the execution gate, and borrows the streams it talks to.
///
/// ## Usage
///
/// Create it with [`Interpreter::new`], call [`Interpreter::run`] once with
/// the program source, then inspect or drop it.
///
/// ```
/// use std::io::Cursor;
///
/// use juicy::{
///     error::Diagnostic,
///     interpreter::{evaluator::core::Interpreter, value::core::Value},
/// };
///
/// let mut input = Cursor::new("");
/// let mut output = Vec::new();
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
///
/// let mut interpreter = Interpreter::new(&mut input, &mut output, &mut diagnostics);
/// interpreter.run("x := 6 * 7; print(x);").unwrap();
///
/// assert_eq!(interpreter.variable("x"), Some(&Value::Int(42)));
/// drop(interpreter);
/// assert_eq!(String::from_utf8(output).unwrap(), "42\n");
/// ```
pub struct Interpreter<'io> {
    /// Global variables. There are no nested scopes.
    pub(crate) variables:      HashMap<String, Value>,
    /// Outcome of the last `to_int`/`to_float`: `0` success, `1` failure.
    pub(crate) error_register: i64,
    /// Decides whether statements currently have any effect.
    pub(crate) gate:           ExecutionGate,
    pub(crate) input:          &'io mut dyn BufRead,
    pub(crate) output:         &'io mut dyn Write,
    pub(crate) sink:           &'io mut dyn DiagnosticSink,
}

impl<'io> Interpreter<'io> {
    /// Creates an interpreter with no variables and a cleared error register.
    #[must_use]
    pub fn new(input: &'io mut dyn BufRead,
               output: &'io mut dyn Write,
               sink: &'io mut dyn DiagnosticSink)
               -> Self {
        Self { variables: HashMap::new(),
               error_register: 0,
               gate: ExecutionGate::new(),
               input,
               output,
               sink }
    }
}

impl Interpreter<'_> {
    /// Lexes, parses and executes a complete program.
    ///
    /// The whole program is parsed before the first statement runs, so a
    /// syntax error produces no output at all. Lexical and syntax errors are
    /// reported to the diagnostic sink and then returned.
    ///
    /// # Errors
    /// - [`ParseError`] for an unterminated string, an oversized integer
    ///   literal or a syntax error.
    /// - [`RuntimeError`] when reading input or writing output fails.
    pub fn run(&mut self, source: &str) -> Result<(), Box<dyn std::error::Error>> {
        let (tokens, end) = match tokenize(source, &mut *self.sink) {
            Ok(lexed) => lexed,
            Err(e) => return Err(self.syntax_failure(e, Position::default())),
        };

        let program = match parse_program(&tokens) {
            Ok(program) => program,
            Err(e) => return Err(self.syntax_failure(e, end)),
        };

        self.execute(&program)?;
        self.output
            .flush()
            .map_err(|source| RuntimeError::Output { source,
                                                     line: end.line })?;

        debug!("Program finished with {} variables defined", self.variables.len());
        Ok(())
    }

    /// Reports a fatal lexing or parsing error and boxes it for the caller.
    ///
    /// Errors without a location of their own (unexpected end of input) are
    /// reported at `end`.
    fn syntax_failure(&mut self, error: ParseError, end: Position) -> Box<dyn std::error::Error> {
        let position = error.position().unwrap_or(end);
        self.sink.report(Diagnostic::error(error.message(), position));
        Box::new(error)
    }

    /// Executes every top-level statement in order.
    ///
    /// # Errors
    /// Returns the first fatal [`RuntimeError`]. Diagnostics do not stop
    /// execution.
    pub fn execute(&mut self, program: &Program) -> EvalResult<()> {
        program.statements
               .iter()
               .try_for_each(|statement| self.execute_statement(statement))
    }

    /// Executes a single statement.
    ///
    /// Nothing happens while the execution gate is closed: no output, no
    /// variable writes and no diagnostics.
    pub fn execute_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        if !self.gate.is_active() {
            return Ok(());
        }

        match statement {
            Statement::Print { arguments, position } => self.execute_print(arguments, *position),
            Statement::Expression { expr, .. } => self.eval(expr).map(|_| ()),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => self.execute_if(condition, then_branch, else_branch.as_deref()),
            Statement::While { condition,
                               body,
                               position, } => self.execute_while(condition, body, *position),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; every variant evaluates its
    /// operands left to right, so their side effects and diagnostics happen in
    /// source order.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for a produced value, or `None` when the value is absent.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        if !self.gate.is_active() {
            return Ok(None);
        }

        match expr {
            Expr::Literal { value, .. } => Ok(Some(Value::from(value))),
            Expr::Variable { name, position } => Ok(self.eval_variable(name, *position)),
            Expr::Assign { name, value, .. } => self.eval_assign(name, value),
            Expr::Negate { expr, position } => self.eval_negate(expr, *position),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => self.eval_binary_op(left, *op, right, *position),
            Expr::Index { target,
                          index,
                          position, } => self.eval_index(target, index, *position),
            Expr::Slice { target,
                          start,
                          end,
                          position, } => {
                self.eval_slice(target, start.as_deref(), end.as_deref(), *position)
            },
            Expr::Call { builtin,
                         argument,
                         position, } => self.eval_call(*builtin, argument, *position),
            Expr::ErrorFlag { .. } => Ok(Some(Value::Int(self.error_register))),
            Expr::Input { prompt, position } => self.eval_input(prompt.as_deref(), *position),
            Expr::Comparison { first, links } => self.eval_comparison(first, links),
            Expr::Logical { left, op, right, .. } => self.eval_logical(left, *op, right),
            Expr::Not { expr, .. } => self.eval_not(expr),
            Expr::Truthy { expr, .. } => self.eval_truthy(expr),
        }
    }

    /// Looks up a global variable.
    fn eval_variable(&mut self, name: &str, position: Position) -> Option<Value> {
        let value = self.variables.get(name).cloned();
        if value.is_none() {
            self.report(Diagnostic::error(format!("Variable '{name}' is not defined"), position));
        }
        value
    }

    /// Stores the value of `value` under `name` and yields it.
    ///
    /// An absent right-hand side leaves the variable untouched.
    fn eval_assign(&mut self, name: &str, value: &Expr) -> EvalResult<Option<Value>> {
        let value = self.eval(value)?;
        if let Some(v) = &value {
            self.variables.insert(name.to_string(), v.clone());
        }
        Ok(value)
    }

    /// Forwards a diagnostic to the sink.
    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.sink.report(diagnostic);
    }

    /// Turns the outcome of a value operation into an optional value,
    /// reporting the diagnostic of a failed one.
    pub(crate) fn settle(&mut self, outcome: Result<Value, Diagnostic>) -> Option<Value> {
        match outcome {
            Ok(value) => Some(value),
            Err(diagnostic) => {
                self.report(diagnostic);
                None
            },
        }
    }

    /// Returns the current value of a global variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Returns the runtime error register, as `err()` would.
    #[must_use]
    pub const fn error_register(&self) -> i64 {
        self.error_register
    }

    /// Number of frames on the execution gate, including the bottom one.
    ///
    /// This is `1` whenever no block is being executed.
    #[must_use]
    pub fn block_depth(&self) -> usize {
        self.gate.depth()
    }
}
