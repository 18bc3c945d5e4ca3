/// Parser entry points.
///
/// Contains the program-level parser, the shared `ParseResult` type and the
/// top of the expression precedence ladder.
pub mod core;

/// Prefix and primary expressions.
///
/// Handles `not`, `bool`, unary minus, indexing and slicing, literals,
/// variables, builtin calls and parenthesized groups.
pub mod unary;

/// Infix expressions.
///
/// Implements the precedence levels for `or`, `and`, comparison chains,
/// addition, multiplication and exponentiation.
pub mod binary;

/// Block parsing.
///
/// Parses brace-delimited statement lists used by `if`, `else` and `while`.
pub mod block;

/// Utility functions for the parser.
///
/// Provides token expectations and comma-separated list parsing.
pub mod utils;

/// Statement parsing.
///
/// Implements `print`, `if`/`else`, `while` and expression statements.
pub mod statement;
