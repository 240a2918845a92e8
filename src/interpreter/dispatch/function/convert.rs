use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::Zero;

use crate::{
    config::Config,
    error::EvalError,
    interpreter::{
        dispatch::{
            collection::{self, broadcast, broadcast2},
            core::{EvalResult, single},
            promote::to_real,
        },
        value::{big, core::Value},
    },
    util::num::usize_to_f64,
};

/// `number`: converts a big number, boolean or numeric string to a plain
/// number.
pub fn number(args: &[Value], _config: &Config) -> EvalResult<Value> {
    broadcast(single("number", args)?, &|x| match x {
        Value::String(s) => {
            let parsed = s.trim().parse::<f64>().map_err(|_| {
                                                     EvalError::invalid("number",
                                                                        format!("cannot convert \"{s}\" to a number"))
                                                 })?;
            Ok(Value::Number(parsed))
        },
        _ => to_real(x).map(Value::Number)
                       .ok_or_else(|| EvalError::unsupported("number", &[x])),
    })
}

/// `bignumber`: converts a number, boolean or decimal string to an exact
/// big number.
///
/// # Example
/// ```
/// use mathexpr::{Config, Value, interpreter::dispatch::function::convert::bignumber};
///
/// let exact = bignumber(&[Value::from("0.1")], &Config::default()).unwrap();
/// assert_eq!(exact.to_string(), "0.1");
/// assert!(bignumber(&[Value::Number(f64::NAN)], &Config::default()).is_err());
/// ```
pub fn bignumber(args: &[Value], _config: &Config) -> EvalResult<Value> {
    broadcast(single("bignumber", args)?, &|x| {
        let converted = match x {
            Value::BigNumber(r) => Some(r.clone()),
            Value::Number(n) => big::from_f64(*n),
            Value::Boolean(b) => Some(BigRational::from_integer(u8::from(*b).into())),
            Value::String(s) => big::parse_decimal(s),
            _ => return Err(EvalError::unsupported("bignumber", &[x])),
        };
        converted.map(Value::BigNumber).ok_or_else(|| {
                                            EvalError::invalid("bignumber",
                                                               format!("cannot convert {x} to a bignumber"))
                                        })
    })
}

/// `complex(x)` converts a numeric value; `complex(re, im)` builds one from
/// its parts.
pub fn complex(args: &[Value], _config: &Config) -> EvalResult<Value> {
    match args {
        [x] => broadcast(x, &|x| match x {
            Value::Complex(_) => Ok(x.clone()),
            _ => to_real(x).map(|re| Value::Complex(Complex64::new(re, 0.0)))
                           .ok_or_else(|| EvalError::unsupported("complex", &[x])),
        }),
        [re, im] => broadcast2("complex", re, im, &|re, im| match (to_real(re), to_real(im)) {
            (Some(a), Some(b)) => Ok(Value::Complex(Complex64::new(a, b))),
            _ => Err(EvalError::unsupported("complex", &[re, im])),
        }),
        _ => Err(EvalError::Arguments { name:     "complex".to_string(),
                                        given:    args.len(),
                                        expected: "1 or 2".to_string(), }),
    }
}

/// `string`: the display form of a value; strings are returned unquoted.
pub fn string(args: &[Value], _config: &Config) -> EvalResult<Value> {
    match single("string", args)? {
        Value::String(s) => Ok(Value::String(s.clone())),
        other => Ok(Value::String(other.to_string())),
    }
}

/// `re`: the real part. Real kinds are returned as they are.
pub fn re(args: &[Value], _config: &Config) -> EvalResult<Value> {
    broadcast(single("re", args)?, &|x| match x {
        Value::Complex(c) => Ok(Value::Number(c.re)),
        Value::Number(_) | Value::BigNumber(_) => Ok(x.clone()),
        Value::Boolean(_) => Ok(Value::Number(x.as_number().unwrap_or_default())),
        _ => Err(EvalError::unsupported("re", &[x])),
    })
}

/// `im`: the imaginary part, zero for real kinds.
pub fn im(args: &[Value], _config: &Config) -> EvalResult<Value> {
    broadcast(single("im", args)?, &|x| match x {
        Value::Complex(c) => Ok(Value::Number(c.im)),
        Value::Number(_) | Value::Boolean(_) => Ok(Value::Number(0.0)),
        Value::BigNumber(_) => Ok(Value::BigNumber(BigRational::zero())),
        _ => Err(EvalError::unsupported("im", &[x])),
    })
}

/// `conj`: the complex conjugate.
pub fn conj(args: &[Value], _config: &Config) -> EvalResult<Value> {
    broadcast(single("conj", args)?, &|x| match x {
        Value::Complex(c) => Ok(Value::Complex(c.conj())),
        Value::Number(_) | Value::BigNumber(_) => Ok(x.clone()),
        Value::Boolean(_) => Ok(Value::Number(x.as_number().unwrap_or_default())),
        _ => Err(EvalError::unsupported("conj", &[x])),
    })
}

/// `size`: the dimensions of an array, empty for a scalar.
///
/// # Example
/// ```
/// use mathexpr::Engine;
///
/// let mut engine = Engine::new();
/// let size = engine.eval("size([1, 2, 3; 4, 5, 6])").unwrap().unwrap();
/// assert_eq!(size.to_string(), "[2, 3]");
/// ```
pub fn size(args: &[Value], _config: &Config) -> EvalResult<Value> {
    let dimensions = collection::size(single("size", args)?)?;
    Ok(dimensions.into_iter()
                 .map(|d| Value::Number(usize_to_f64(d)))
                 .collect::<Vec<_>>()
                 .into())
}
