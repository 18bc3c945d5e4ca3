/// Runtime values and their conversions.
///
/// Defines the `Value` enum together with truthiness, numeric promotion and
/// the text form used by `print` and `to_str`.
pub mod core;
