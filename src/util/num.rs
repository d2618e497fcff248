/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use aurora::util::num::usize_to_f64_checked;
///
/// assert_eq!(usize_to_f64_checked(42, "too big!"), Ok(42.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked<E>(value: usize, error: E) -> Result<f64, E> {
    match u64::try_from(value) {
        Ok(v) if v <= MAX_SAFE_U64_INT => Ok(v as f64),
        _ => Err(error),
    }
}

/// Formats a number the way `say` prints it.
///
/// Integral values print without a fractional part, negative zero prints as
/// `0`, and the non-finite values print as `Infinity`, `-Infinity` and `NaN`.
/// Magnitudes of `1e21` and above, or below `1e-6`, use exponent form with an
/// explicit sign on the exponent.
///
/// ## Example
/// ```
/// use aurora::util::num::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1.0 / 0.0), "Infinity");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(-1.5e22), "-1.5e+22");
/// assert_eq!(format_number(1e-7), "1e-7");
/// assert_eq!(format_number(0.000_001), "0.000001");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            },
            _ => formatted,
        };
    }
    format!("{value}")
}
