/// Parsing errors.
///
/// Defines the fatal errors raised while lexing and parsing source code. A
/// parse error aborts the run before any statement executes.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the fatal errors that can interrupt evaluation. Ordinary runtime
/// problems such as type mismatches are not errors in this sense; they are
/// reported as diagnostics and evaluation continues.
pub mod runtime_error;
/// Non-fatal diagnostics.
///
/// Defines the diagnostic event type and the sink trait the interpreter
/// reports through. Formatting and coloring belong to the sink.
pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticSink, Severity};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
