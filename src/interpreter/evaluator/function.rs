/// Builtin implementations.
///
/// `len`, `to_str`, `to_int` and `to_float` as plain functions on values.
pub mod builtin;

/// Builtin call evaluation.
///
/// Evaluates arguments, updates the runtime error register and handles
/// `input`.
pub mod core;

/// The `print` statement.
///
/// Writes the text form of its arguments as one output line.
pub mod print;
