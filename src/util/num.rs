/// Converts an `i64` to `f64` for mixed integer/float arithmetic.
///
/// Integers beyond `2^53` lose precision, exactly as they would in any
/// language that promotes integers to doubles.
///
/// ## Example
/// ```
/// use juicy::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// ## Returns
/// - `Some(i64)`: The truncated value.
/// - `None`: If the value is NaN, infinite, or outside the `i64` range.
///
/// ## Example
/// ```
/// use juicy::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(3.9), Some(3));
/// assert_eq!(f64_to_i64_truncated(-3.9), Some(-3));
/// assert_eq!(f64_to_i64_truncated(f64::NAN), None);
/// assert_eq!(f64_to_i64_truncated(1e30), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_truncated(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// Converts a length or count to `i64`, saturating at `i64::MAX`.
///
/// ## Example
/// ```
/// use juicy::util::num::usize_to_i64;
///
/// assert_eq!(usize_to_i64(12), 12);
/// ```
#[must_use]
pub fn usize_to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Formats a float the way the language prints it.
///
/// The shortest representation that round-trips is used. Integral values keep
/// a trailing `.0`. Very large and very small magnitudes switch to exponent
/// notation with a signed, two-digit exponent.
///
/// ## Example
/// ```
/// use juicy::util::num::format_float;
///
/// assert_eq!(format_float(3.0), "3.0");
/// assert_eq!(format_float(0.1), "0.1");
/// assert_eq!(format_float(2.5e-7), "2.5e-07");
/// assert_eq!(format_float(1e20), "1e+20");
/// assert_eq!(format_float(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let text = value.to_string();
        return if text.contains('.') { text } else { format!("{text}.0") };
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent.strip_prefix('-')
                                         .map_or(("+", exponent), |digits| ("-", digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        },
        None => text,
    }
}
