/// Arithmetic dispatch and operand type checks.
pub mod core;

/// Scalar arithmetic on integers and floats.
///
/// Implements `+`, `-`, `*` and `/` with integer overflow and division by
/// zero detection.
pub mod scalar;

/// Exponentiation.
pub mod power;

/// Chained relational comparisons.
///
/// Walks a comparison chain left to right, carrying the right-hand value of
/// each successful step and `false` after a failed one.
pub mod comparison;

/// The `and` and `or` connectives.
pub mod logic;
