use log::trace;
use num_complex::Complex64;
use num_rational::BigRational;

use crate::{
    config::Config,
    error::EvalError,
    interpreter::{
        dispatch::{binary::core::BinaryRule, core::EvalResult},
        value::{big, complex::from_real, core::Value},
    },
    util::num::f64_to_i32_exact,
};

/// Largest exact big-number power, in bits of numerator plus denominator.
///
/// About 315 000 decimal digits; larger powers are computed in plain numbers.
pub const MAX_BIG_POWER_BITS: u64 = 1 << 20;

/// `pow`
///
/// A negative number raised to a non-integer power is complex. Integer
/// exponents of complex and big numbers are computed by repeated
/// multiplication, exactly for big numbers as long as the result stays below
/// [`MAX_BIG_POWER_BITS`]; other big-number powers are computed in plain
/// numbers.
pub struct Pow;

impl BinaryRule for Pow {
    const NAME: &'static str = "pow";

    fn numbers(x: f64, y: f64, _config: &Config) -> Option<EvalResult<Value>> {
        if x < 0.0 && y.fract() != 0.0 && y.is_finite() {
            return Some(Ok(Value::Complex(from_real(x).powc(from_real(y)))));
        }
        Some(Ok(Value::Number(x.powf(y))))
    }

    fn complexes(x: Complex64, y: Complex64, _config: &Config) -> Option<EvalResult<Value>> {
        let power = match f64_to_i32_exact(y.re) {
            Some(exponent) if y.im == 0.0 => x.powi(exponent),
            _ => x.powc(y),
        };
        Some(Ok(Value::Complex(power)))
    }

    fn bignumbers(x: &BigRational, y: &BigRational, _config: &Config) -> Option<EvalResult<Value>> {
        let exponent = big::to_i64(y)?;
        let bits = x.numer().bits() + x.denom().bits();
        if bits.saturating_mul(exponent.unsigned_abs()) > MAX_BIG_POWER_BITS {
            trace!("pow: {exponent} is too large an exact exponent");
            return None;
        }
        Some(big::powi(x, exponent).map(Value::BigNumber)
                                   .ok_or_else(|| EvalError::division_by_zero(Self::NAME)))
    }
}
