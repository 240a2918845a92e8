use log::trace;
use num_complex::Complex64;
use num_rational::BigRational;

use crate::{
    config::Config,
    error::EvalError,
    interpreter::{
        dispatch::{collection::broadcast2, core::EvalResult, promote::promote_pair},
        value::{big, core::Value, unit::Unit},
    },
};

/// Per-kind implementations of one binary operation.
///
/// Each method handles one pair of kinds and returns `None` when the
/// operation has no rule for it; [`apply_binary`] then tries broadcasting and
/// promotion before giving up. A missing big-number rule falls back to the
/// plain-number rule on downgraded operands.
pub trait BinaryRule {
    /// The operation name, used in error messages.
    const NAME: &'static str;

    /// number × number
    fn numbers(_x: f64, _y: f64, _config: &Config) -> Option<EvalResult<Value>> {
        None
    }

    /// complex × complex
    fn complexes(_x: Complex64, _y: Complex64, _config: &Config) -> Option<EvalResult<Value>> {
        None
    }

    /// bignumber × bignumber
    fn bignumbers(_x: &BigRational,
                  _y: &BigRational,
                  _config: &Config)
                  -> Option<EvalResult<Value>> {
        None
    }

    /// unit × unit
    fn units(_x: &Unit, _y: &Unit, _config: &Config) -> Option<EvalResult<Value>> {
        None
    }

    /// unit × number
    fn unit_number(_x: &Unit, _y: f64) -> Option<EvalResult<Value>> {
        None
    }

    /// number × unit
    fn number_unit(_x: f64, _y: &Unit) -> Option<EvalResult<Value>> {
        None
    }

    /// string × string
    fn strings(_x: &str, _y: &str) -> Option<EvalResult<Value>> {
        None
    }

    /// boolean × boolean; without a rule booleans are promoted to numbers.
    fn booleans(_x: bool, _y: bool) -> Option<EvalResult<Value>> {
        None
    }
}

fn same_kind<R: BinaryRule>(x: &Value, y: &Value, config: &Config) -> Option<EvalResult<Value>> {
    match (x, y) {
        (Value::Number(a), Value::Number(b)) => R::numbers(*a, *b, config),
        (Value::Complex(a), Value::Complex(b)) => R::complexes(*a, *b, config),
        (Value::BigNumber(a), Value::BigNumber(b)) => {
            R::bignumbers(a, b, config).or_else(|| {
                                           trace!("{}: no bignumber rule, downgrading", R::NAME);
                                           R::numbers(big::to_f64(a), big::to_f64(b), config)
                                       })
        },
        (Value::Unit(a), Value::Unit(b)) => R::units(a, b, config),
        (Value::Unit(a), Value::Number(b)) => R::unit_number(a, *b),
        (Value::Number(a), Value::Unit(b)) => R::number_unit(*a, b),
        (Value::String(a), Value::String(b)) => R::strings(a, b),
        (Value::Boolean(a), Value::Boolean(b)) => R::booleans(*a, *b),
        _ => None,
    }
}

/// Applies a binary operation to two values.
///
/// 1. A rule for the exact pair of kinds is applied directly.
/// 2. If either side is an array, the operation is broadcast element-wise.
/// 3. Otherwise the pair is promoted to a common kind and tried again.
/// 4. If nothing applies, the result is [`EvalError::UnsupportedType`].
///
/// # Errors
/// See above; rules add their own errors, such as division by zero.
pub fn apply_binary<R: BinaryRule>(x: &Value, y: &Value, config: &Config) -> EvalResult<Value> {
    if let Some(result) = same_kind::<R>(x, y, config) {
        return result;
    }

    if x.is_array() || y.is_array() {
        return broadcast2(R::NAME, x, y, &|a, b| apply_binary::<R>(a, b, config));
    }

    if let Some((px, py)) = promote_pair(x, y) {
        trace!("{}: promoted ({}, {}) to ({}, {})",
               R::NAME,
               x.kind(),
               y.kind(),
               px.kind(),
               py.kind());
        return apply_binary::<R>(&px, &py, config);
    }

    Err(EvalError::unsupported(R::NAME, &[x, y]))
}

/// Table entry point for a binary rule.
pub fn apply_rule<R: BinaryRule>(args: &[Value], config: &Config) -> EvalResult<Value> {
    match args {
        [x, y] => apply_binary::<R>(x, y, config),
        _ => Err(EvalError::Arguments { name:     R::NAME.to_string(),
                                        given:    args.len(),
                                        expected: "2".to_string(), }),
    }
}

/// Fails with [`EvalError::DimensionMismatch`] unless both units measure the
/// same dimension.
pub(crate) fn same_base(name: &str, x: &Unit, y: &Unit) -> EvalResult<()> {
    if x.equal_base(y) {
        return Ok(());
    }
    Err(EvalError::dimensions(name,
                              format!("cannot combine {} ({}) with {} ({})",
                                      x.name(),
                                      x.base(),
                                      y.name(),
                                      y.base())))
}
