use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::Signed;

use crate::{
    config::Config,
    error::EvalError,
    interpreter::{
        dispatch::{
            collection::{broadcast, broadcast2},
            core::{EvalResult, single},
            promote::to_real,
        },
        value::{big, core::Value, unit::Base},
    },
    util::num::f64_to_i64_checked,
};

/// Most decimals accepted by `round(x, n)`.
const MAX_DECIMALS: i64 = 15;

// Generates a unary builtin over numbers, complex numbers and, when
// `angles` is set, angle units converted to radians. Booleans and big numbers
// are converted to numbers first; arrays are mapped element-wise.
macro_rules! real_complex_builtin {
    ($(#[$doc:meta])* $fname:ident, $name:literal, $func:ident, angles: $angles:literal) => {
        $(#[$doc])*
        pub fn $fname(args: &[Value], _config: &Config) -> EvalResult<Value> {
            broadcast(single($name, args)?, &|x| match x {
                Value::Complex(c) => Ok(Value::Complex(c.$func())),
                Value::Unit(u) if $angles && u.base() == Base::Angle => {
                    Ok(Value::Number(u.si_value().$func()))
                },
                _ => match to_real(x) {
                    Some(r) => Ok(Value::Number(r.$func())),
                    None => Err(EvalError::unsupported($name, &[x])),
                },
            })
        }
    };
}

real_complex_builtin!(
    /// `exp`
    exp, "exp", exp, angles: false
);
real_complex_builtin!(
    /// `sin`, in radians or of an angle unit.
    ///
    /// # Example
    /// ```
    /// use mathexpr::{Config, Value, interpreter::dispatch::function::builtin::sin};
    ///
    /// let x = Value::Number(std::f64::consts::PI / 2.0);
    /// let r = sin(&[x], &Config::default()).unwrap();
    ///
    /// assert_eq!(r, Value::Number(1.0));
    /// ```
    sin, "sin", sin, angles: true
);
real_complex_builtin!(
    /// `cos`, in radians or of an angle unit.
    cos, "cos", cos, angles: true
);
real_complex_builtin!(
    /// `tan`, in radians or of an angle unit.
    tan, "tan", tan, angles: true
);

/// `abs`: magnitude of any numeric kind; the magnitude of a complex number is
/// a plain number.
pub fn abs(args: &[Value], _config: &Config) -> EvalResult<Value> {
    broadcast(single("abs", args)?, &|x| match x {
        Value::Number(n) => Ok(Value::Number(n.abs())),
        Value::BigNumber(r) => Ok(Value::BigNumber(r.abs())),
        Value::Complex(c) => Ok(Value::Number(c.norm())),
        Value::Unit(u) => Ok(Value::Unit(u.with_si_value(u.si_value().abs()))),
        Value::Boolean(_) => Ok(Value::Number(x.as_number().unwrap_or_default())),
        _ => Err(EvalError::unsupported("abs", &[x])),
    })
}

/// Applies a rounding operation (`floor`, `ceil`, or `round`) to a numeric
/// value.
///
/// Big numbers stay exact; complex numbers are rounded per component.
fn unary_round(name: &str,
               x: &Value,
               real: fn(f64) -> f64,
               exact: fn(&BigRational) -> BigRational)
               -> EvalResult<Value> {
    match x {
        Value::Number(n) => Ok(Value::Number(real(*n))),
        Value::BigNumber(r) => Ok(Value::BigNumber(exact(r))),
        Value::Complex(c) => Ok(Value::Complex(Complex64::new(real(c.re), real(c.im)))),
        Value::Boolean(_) => Ok(Value::Number(real(x.as_number().unwrap_or_default()))),
        _ => Err(EvalError::unsupported(name, &[x])),
    }
}

/// `floor`
pub fn floor(args: &[Value], _config: &Config) -> EvalResult<Value> {
    broadcast(single("floor", args)?, &|x| unary_round("floor", x, f64::floor, BigRational::floor))
}

/// `ceil`
pub fn ceil(args: &[Value], _config: &Config) -> EvalResult<Value> {
    broadcast(single("ceil", args)?, &|x| unary_round("ceil", x, f64::ceil, BigRational::ceil))
}

/// `round(x)` rounds half away from zero; `round(x, n)` keeps `n` decimals.
///
/// # Example
/// ```
/// use mathexpr::{Config, Value, interpreter::dispatch::function::builtin::round};
///
/// let config = Config::default();
/// assert_eq!(round(&[Value::Number(2.5)], &config).unwrap(), Value::Number(3.0));
/// assert_eq!(round(&[Value::Number(3.14159), Value::Number(2.0)], &config).unwrap(),
///            Value::Number(3.14));
/// ```
pub fn round(args: &[Value], _config: &Config) -> EvalResult<Value> {
    match args {
        [x] => broadcast(x, &|x| unary_round("round", x, f64::round, BigRational::round)),
        [x, decimals] => broadcast2("round", x, decimals, &|x, decimals| round_to(x, decimals)),
        _ => Err(EvalError::Arguments { name:     "round".to_string(),
                                        given:    args.len(),
                                        expected: "1 or 2".to_string(), }),
    }
}

fn round_to(x: &Value, decimals: &Value) -> EvalResult<Value> {
    let invalid = || EvalError::invalid("round", "decimals must be an integer between 0 and 15");
    let decimals = to_real(decimals).ok_or_else(invalid)?;
    let decimals = f64_to_i64_checked(decimals, invalid())?;
    if !(0..=MAX_DECIMALS).contains(&decimals) {
        return Err(invalid());
    }

    match x {
        Value::BigNumber(r) => {
            let scale = big::powi(&BigRational::from_integer(10.into()), decimals).ok_or_else(invalid)?;
            Ok(Value::BigNumber((r * &scale).round() / scale))
        },
        _ => {
            let scale = format!("1e{decimals}").parse::<f64>().map_err(|_| invalid())?;
            let scaled = |n: f64| (n * scale).round() / scale;
            match x {
                Value::Complex(c) => Ok(Value::Complex(Complex64::new(scaled(c.re), scaled(c.im)))),
                _ => match to_real(x) {
                    Some(n) => Ok(Value::Number(scaled(n))),
                    None => Err(EvalError::unsupported("round", &[x])),
                },
            }
        },
    }
}
