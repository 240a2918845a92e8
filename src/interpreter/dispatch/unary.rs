use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::{
    config::Config,
    error::EvalError,
    interpreter::{
        dispatch::{
            binary::logic::number_truth,
            collection::{self, broadcast},
            core::{EvalResult, single},
        },
        value::core::Value,
    },
    util::num::{f64_to_usize_checked, usize_to_f64},
};

/// Largest argument whose factorial is finite as a plain number.
const MAX_NUMBER_FACTORIAL: usize = 170;

/// Largest argument accepted by the exact big-number factorial.
const MAX_BIG_FACTORIAL: usize = 10_000;

/// `unaryMinus`: negation, element-wise over arrays.
pub fn unary_minus(args: &[Value], _config: &Config) -> EvalResult<Value> {
    broadcast(single("unaryMinus", args)?, &|x| match x {
        Value::Number(n) => Ok(Value::Number(-n)),
        Value::BigNumber(r) => Ok(Value::BigNumber(-r)),
        Value::Complex(c) => Ok(Value::Complex(-c)),
        Value::Unit(u) => Ok(Value::Unit(u.with_si_value(-u.si_value()))),
        Value::Boolean(_) => Ok(Value::Number(-x.as_number().unwrap_or_default())),
        _ => Err(EvalError::unsupported("unaryMinus", &[x])),
    })
}

/// `unaryPlus`: the identity on numeric kinds; booleans become numbers.
pub fn unary_plus(args: &[Value], _config: &Config) -> EvalResult<Value> {
    broadcast(single("unaryPlus", args)?, &|x| match x {
        Value::Number(_) | Value::BigNumber(_) | Value::Complex(_) | Value::Unit(_) => Ok(x.clone()),
        Value::Boolean(_) => Ok(Value::Number(x.as_number().unwrap_or_default())),
        _ => Err(EvalError::unsupported("unaryPlus", &[x])),
    })
}

/// `not`: `true` for zero values and `false`.
pub fn not(args: &[Value], _config: &Config) -> EvalResult<Value> {
    broadcast(single("not", args)?, &|x| match x {
        Value::Number(n) => Ok(Value::Boolean(!number_truth(*n))),
        Value::BigNumber(r) => Ok(Value::Boolean(r.is_zero())),
        Value::Complex(c) => Ok(Value::Boolean(c.is_zero())),
        Value::Unit(u) => Ok(Value::Boolean(!number_truth(u.si_value()))),
        Value::Boolean(b) => Ok(Value::Boolean(!b)),
        _ => Err(EvalError::unsupported("not", &[x])),
    })
}

/// `factorial`, defined for non-negative integers.
///
/// Plain numbers above 170 overflow to infinity; big numbers are exact.
///
/// # Example
/// ```
/// use mathexpr::{Config, Value, interpreter::dispatch::unary::factorial};
///
/// let five = factorial(&[Value::Number(5.0)], &Config::default()).unwrap();
/// assert_eq!(five, Value::Number(120.0));
/// assert!(factorial(&[Value::Number(2.5)], &Config::default()).is_err());
/// ```
pub fn factorial(args: &[Value], _config: &Config) -> EvalResult<Value> {
    broadcast(single("factorial", args)?, &|x| {
        let invalid = || EvalError::invalid("factorial", "expected a non-negative integer");
        match x {
            Value::Number(_) | Value::Boolean(_) => {
                let n = f64_to_usize_checked(x.as_number().unwrap_or(f64::NAN), invalid())?;
                if n > MAX_NUMBER_FACTORIAL {
                    return Ok(Value::Number(f64::INFINITY));
                }
                Ok(Value::Number((1..=n).fold(1.0, |product, k| product * usize_to_f64(k))))
            },
            Value::BigNumber(r) => {
                if !r.is_integer() || r.is_negative() {
                    return Err(invalid());
                }
                let n = r.to_integer();
                if n > BigInt::from(MAX_BIG_FACTORIAL) {
                    return Err(EvalError::invalid("factorial", "argument too large"));
                }
                let product = big_factorial(&n);
                Ok(Value::BigNumber(BigRational::from_integer(product)))
            },
            _ => Err(EvalError::unsupported("factorial", &[x])),
        }
    })
}

fn big_factorial(n: &BigInt) -> BigInt {
    let mut product = BigInt::from(1u8);
    let mut k = BigInt::from(2u8);
    while &k <= n {
        product *= &k;
        k += 1u8;
    }
    product
}

/// `transpose`: swaps the rows and columns of a matrix.
pub fn transpose(args: &[Value], _config: &Config) -> EvalResult<Value> {
    collection::transpose(single("transpose", args)?)
}
