use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

/// Digits printed after the decimal point before a non-terminating fraction
/// is cut off.
pub const FRACTION_DIGITS: usize = 20;

/// Largest decimal exponent accepted when parsing.
const MAX_EXPONENT: i64 = 4096;

/// Parses a decimal literal such as `12`, `-0.25`, `.5` or `2.5e-3` into an
/// exact rational.
///
/// Returns `None` for anything that is not a plain decimal number.
///
/// # Example
/// ```
/// use mathexpr::interpreter::value::big::parse_decimal;
/// use num_rational::BigRational;
///
/// let tenth = parse_decimal("0.1").unwrap();
/// assert_eq!(tenth, BigRational::new(1.into(), 10.into()));
/// assert_eq!(parse_decimal("2.5e-1"), parse_decimal(".25"));
/// assert!(parse_decimal("1.2.3").is_none());
/// ```
#[must_use]
pub fn parse_decimal(text: &str) -> Option<BigRational> {
    let text = text.trim();
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(index) => (&text[..index], text[index + 1..].parse::<i64>().ok()?),
        None => (text, 0),
    };
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }
    if !integer.bytes().chain(fraction.bytes()).all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    let digits = format!("{integer}{fraction}");
    let numerator = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    let scale = exponent.checked_sub(i64::try_from(fraction.len()).ok()?)?;
    if scale.abs() > MAX_EXPONENT {
        return None;
    }
    let factor = num_traits::pow(BigInt::from(10u8), usize::try_from(scale.unsigned_abs()).ok()?);

    let value = if scale >= 0 {
        BigRational::from_integer(numerator * factor)
    } else {
        BigRational::new(numerator, factor)
    };
    Some(if negative { -value } else { value })
}

/// Converts a finite `f64` to the rational its shortest decimal form denotes.
///
/// `0.1` becomes exactly `1/10`, not the binary fraction behind it.
#[must_use]
pub fn from_f64(value: f64) -> Option<BigRational> {
    if !value.is_finite() {
        return None;
    }
    parse_decimal(&format!("{value:e}"))
}

/// Converts a rational to the nearest `f64`.
#[must_use]
pub fn to_f64(value: &BigRational) -> f64 {
    match (value.numer().to_f64(), value.denom().to_f64()) {
        (Some(numer), Some(denom)) => numer / denom,
        _ => f64::NAN,
    }
}

/// Returns the value as an `i64` when it is an integer in range.
#[must_use]
pub fn to_i64(value: &BigRational) -> Option<i64> {
    if value.is_integer() { value.numer().to_i64() } else { None }
}

/// Raises a rational to an integer power exactly.
///
/// Returns `None` when the base is zero and the exponent negative.
#[must_use]
pub fn powi(base: &BigRational, exponent: i64) -> Option<BigRational> {
    let magnitude = u32::try_from(exponent.unsigned_abs()).ok()?;
    let numer = base.numer().pow(magnitude);
    let denom = base.denom().pow(magnitude);
    if exponent >= 0 {
        Some(BigRational::new(numer, denom))
    } else if numer.is_zero() {
        None
    } else {
        Some(BigRational::new(denom, numer))
    }
}

/// Formats a rational as a decimal string.
///
/// Integers print without a fraction. Other values print up to
/// [`FRACTION_DIGITS`] digits after the point with trailing zeros removed;
/// values too small to show a digit fall back to scientific notation.
///
/// # Example
/// ```
/// use mathexpr::interpreter::value::big::{format, parse_decimal};
/// use num_rational::BigRational;
///
/// assert_eq!(format(&parse_decimal("0.3").unwrap()), "0.3");
/// assert_eq!(format(&parse_decimal("-42").unwrap()), "-42");
/// assert_eq!(format(&BigRational::new(1.into(), 3.into())), "0.33333333333333333333");
/// ```
#[must_use]
pub fn format(value: &BigRational) -> String {
    if value.is_integer() {
        return value.numer().to_string();
    }

    let magnitude = value.abs();
    let denom = magnitude.denom();
    let integer = magnitude.numer() / denom;
    let mut remainder = magnitude.numer() % denom;
    let mut fraction = String::with_capacity(FRACTION_DIGITS);

    let ten = BigInt::from(10u8);
    for _ in 0..FRACTION_DIGITS {
        if remainder.is_zero() {
            break;
        }
        remainder *= &ten;
        let digit = (&remainder / denom).to_u32().and_then(|digit| char::from_digit(digit, 10));
        fraction.push(digit.unwrap_or('0'));
        remainder %= denom;
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        if integer.is_zero() {
            return format!("{:e}", to_f64(value));
        }
        return format!("{}{integer}", if value.is_negative() { "-" } else { "" });
    }
    format!("{}{integer}.{fraction}", if value.is_negative() { "-" } else { "" })
}
