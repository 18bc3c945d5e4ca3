/// Numeric conversion and formatting helpers.
///
/// This module gathers the few places where the interpreter has to cross
/// between `i64`, `usize` and `f64`, plus the text form of floating-point
/// values. Keeping the casts here keeps the `clippy::cast_*` allowances in one
/// spot.
pub mod num;
