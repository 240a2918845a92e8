/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Number of significant digits used when displaying converted quantities.
pub const DISPLAY_DIGITS: usize = 14;

/// Compares two numbers with a relative tolerance.
///
/// Two finite numbers are equal when their difference is within `epsilon`
/// times the larger magnitude, or within machine epsilon for values near zero.
/// `NaN` never compares equal; infinities only equal themselves.
///
/// # Example
/// ```
/// use mathexpr::util::num::nearly_equal;
///
/// assert!(nearly_equal(0.1 + 0.2, 0.3, 1e-14));
/// assert!(!nearly_equal(1.0, 1.001, 1e-14));
/// assert!(!nearly_equal(f64::NAN, f64::NAN, 1e-14));
/// assert!(nearly_equal(f64::INFINITY, f64::INFINITY, 1e-14));
/// ```
#[must_use]
pub fn nearly_equal(x: f64, y: f64, epsilon: f64) -> bool {
    if x.is_nan() || y.is_nan() {
        return false;
    }
    if !x.is_finite() || !y.is_finite() {
        return x == y;
    }
    let tolerance = f64::EPSILON.max(epsilon * x.abs().max(y.abs()));
    (x - y).abs() <= tolerance
}

/// Rounds a number to the given count of significant digits.
///
/// Used to hide representation noise such as `5.080000000000001` after unit
/// conversions. Non-finite values are returned unchanged.
///
/// # Example
/// ```
/// use mathexpr::util::num::round_significant;
///
/// assert_eq!(round_significant(5.080000000000001, 14), 5.08);
/// assert_eq!(round_significant(123456.0, 2), 120000.0);
/// ```
#[must_use]
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 || digits == 0 {
        return value;
    }
    format!("{:.*e}", digits - 1, value).parse().unwrap_or(value)
}

/// Converts an `f64` to an `i64` if it is an integer within the safe range.
///
/// ## Errors
/// Returns `Err(error)` if the value has a fractional part, is not finite, or
/// exceeds [`MAX_SAFE_INTEGER`] in absolute value.
///
/// ## Example
/// ```
/// use mathexpr::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(-42.0, "bad"), Ok(-42));
/// assert_eq!(f64_to_i64_checked(1.5, "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_checked<E>(value: f64, error: E) -> Result<i64, E> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_INTEGER {
        return Err(error);
    }
    Ok(value as i64)
}

/// Converts an `f64` to a `usize` if it is a non-negative integer within the
/// safe range.
///
/// ## Errors
/// Returns `Err(error)` for negative, fractional, or out-of-range values.
///
/// ## Example
/// ```
/// use mathexpr::util::num::f64_to_usize_checked;
///
/// assert_eq!(f64_to_usize_checked(3.0, ()), Ok(3));
/// assert!(f64_to_usize_checked(-1.0, ()).is_err());
/// ```
pub fn f64_to_usize_checked<E>(value: f64, error: E) -> Result<usize, E> {
    match f64_to_i64_checked(value, ()) {
        Ok(integer) => usize::try_from(integer).map_err(|_| error),
        Err(()) => Err(error),
    }
}

/// Converts an `f64` to an `i32` exponent when it is an integer in range.
#[must_use]
pub fn f64_to_i32_exact(value: f64) -> Option<i32> {
    f64_to_i64_checked(value, ()).ok().and_then(|integer| i32::try_from(integer).ok())
}

/// Converts a count to `f64`. Counts in this crate are collection sizes, far
/// below the precision limit.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}
