/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter` type, the program entry point, statement
/// dispatch, expression dispatch, variables and diagnostic reporting.
pub mod core;

/// The execution gate.
///
/// A stack of booleans that decides whether statements currently have any
/// effect. Every block body runs under its own frame.
pub mod gate;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparison chains and the
/// boolean connectives.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation, `not` and the `bool` truthiness
/// conversion.
pub mod unary;

/// String indexing and slicing.
pub mod string;

/// Builtin calls and `print`.
///
/// Handles `len`, `to_str`, `to_int`, `to_float`, `err` and `input`, and the
/// runtime error register they share.
pub mod function;

/// `if` and `while`.
///
/// Runs block bodies under execution gate frames.
pub mod control_flow;
