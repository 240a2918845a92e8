use num_bigint::BigInt;
use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::{
    config::Config,
    error::EvalError,
    interpreter::{
        dispatch::{
            collection::broadcast,
            core::{EvalResult, single},
        },
        value::{big, core::Value},
    },
};

/// `sqrt`: square root of any numeric kind, element-wise over arrays.
///
/// The root of a negative number is imaginary. A big number keeps an exact
/// result when both its numerator and denominator are perfect squares.
///
/// # Example
/// ```
/// use mathexpr::{Config, Value, interpreter::dispatch::function::sqrt::sqrt};
/// use num_complex::Complex64;
///
/// let config = Config::default();
/// assert_eq!(sqrt(&[Value::Number(9.0)], &config).unwrap(), Value::Number(3.0));
/// assert_eq!(sqrt(&[Value::Number(-4.0)], &config).unwrap(),
///            Value::Complex(Complex64::new(0.0, 2.0)));
/// ```
pub fn sqrt(args: &[Value], _config: &Config) -> EvalResult<Value> {
    broadcast(single("sqrt", args)?, &|x| match x {
        Value::Number(n) => Ok(real_sqrt(*n)),
        Value::Boolean(_) => Ok(real_sqrt(x.as_number().unwrap_or_default())),
        Value::Complex(c) => Ok(Value::Complex(c.sqrt())),
        Value::BigNumber(r) if r.is_negative() => {
            Ok(Value::Complex(Complex64::new(0.0, big::to_f64(&-r).sqrt())))
        },
        Value::BigNumber(r) => Ok(exact_sqrt(r).map_or_else(|| real_sqrt(big::to_f64(r)), Value::BigNumber)),
        _ => Err(EvalError::unsupported("sqrt", &[x])),
    })
}

fn real_sqrt(n: f64) -> Value {
    if n < 0.0 {
        Value::Complex(Complex64::new(0.0, (-n).sqrt()))
    } else {
        Value::Number(n.sqrt())
    }
}

fn exact_sqrt(r: &BigRational) -> Option<BigRational> {
    let root = |n: &BigInt| {
        let s = n.sqrt();
        (&s * &s == *n).then_some(s)
    };
    if r.is_zero() {
        return Some(BigRational::zero());
    }
    let numer = root(r.numer())?;
    let denom = root(r.denom())?;
    Some(BigRational::new(numer, denom))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(text: &str) -> BigRational {
        big::parse_decimal(text).unwrap()
    }

    #[test]
    fn perfect_squares_stay_exact() {
        assert_eq!(exact_sqrt(&ratio("2.25")), Some(ratio("1.5")));
        assert_eq!(exact_sqrt(&ratio("0")), Some(ratio("0")));
        assert_eq!(exact_sqrt(&ratio("2")), None);
    }
}
