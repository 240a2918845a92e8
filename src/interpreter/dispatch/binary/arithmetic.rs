use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::Zero;

use crate::{
    config::Config,
    error::EvalError,
    interpreter::{
        dispatch::{
            binary::core::{BinaryRule, same_base},
            core::EvalResult,
        },
        value::{core::Value, unit::Unit},
    },
};

/// `add`: numeric sums, unit sums of equal base, string concatenation.
pub struct Add;

impl BinaryRule for Add {
    const NAME: &'static str = "add";

    fn numbers(x: f64, y: f64, _config: &Config) -> Option<EvalResult<Value>> {
        Some(Ok(Value::Number(x + y)))
    }

    fn complexes(x: Complex64, y: Complex64, _config: &Config) -> Option<EvalResult<Value>> {
        Some(Ok(Value::Complex(x + y)))
    }

    fn bignumbers(x: &BigRational, y: &BigRational, _config: &Config) -> Option<EvalResult<Value>> {
        Some(Ok(Value::BigNumber(x + y)))
    }

    fn units(x: &Unit, y: &Unit, _config: &Config) -> Option<EvalResult<Value>> {
        Some(same_base(Self::NAME, x, y).map(|()| {
                                            Value::Unit(x.with_si_value(x.si_value() + y.si_value()))
                                        }))
    }

    fn strings(x: &str, y: &str) -> Option<EvalResult<Value>> {
        Some(Ok(Value::String(format!("{x}{y}"))))
    }
}

/// `subtract`
pub struct Subtract;

impl BinaryRule for Subtract {
    const NAME: &'static str = "subtract";

    fn numbers(x: f64, y: f64, _config: &Config) -> Option<EvalResult<Value>> {
        Some(Ok(Value::Number(x - y)))
    }

    fn complexes(x: Complex64, y: Complex64, _config: &Config) -> Option<EvalResult<Value>> {
        Some(Ok(Value::Complex(x - y)))
    }

    fn bignumbers(x: &BigRational, y: &BigRational, _config: &Config) -> Option<EvalResult<Value>> {
        Some(Ok(Value::BigNumber(x - y)))
    }

    fn units(x: &Unit, y: &Unit, _config: &Config) -> Option<EvalResult<Value>> {
        Some(same_base(Self::NAME, x, y).map(|()| {
                                            Value::Unit(x.with_si_value(x.si_value() - y.si_value()))
                                        }))
    }
}

/// `multiply`: numeric products and scaling of units by numbers.
pub struct Multiply;

impl BinaryRule for Multiply {
    const NAME: &'static str = "multiply";

    fn numbers(x: f64, y: f64, _config: &Config) -> Option<EvalResult<Value>> {
        Some(Ok(Value::Number(x * y)))
    }

    fn complexes(x: Complex64, y: Complex64, _config: &Config) -> Option<EvalResult<Value>> {
        Some(Ok(Value::Complex(x * y)))
    }

    fn bignumbers(x: &BigRational, y: &BigRational, _config: &Config) -> Option<EvalResult<Value>> {
        Some(Ok(Value::BigNumber(x * y)))
    }

    fn unit_number(x: &Unit, y: f64) -> Option<EvalResult<Value>> {
        Some(Ok(Value::Unit(x.with_si_value(x.si_value() * y))))
    }

    fn number_unit(x: f64, y: &Unit) -> Option<EvalResult<Value>> {
        Some(Ok(Value::Unit(y.with_si_value(x * y.si_value()))))
    }
}

/// `divide`: numeric quotients, units divided by numbers, and the plain ratio
/// of two units of equal base.
pub struct Divide;

impl BinaryRule for Divide {
    const NAME: &'static str = "divide";

    fn numbers(x: f64, y: f64, _config: &Config) -> Option<EvalResult<Value>> {
        if y == 0.0 {
            return Some(Err(EvalError::division_by_zero(Self::NAME)));
        }
        Some(Ok(Value::Number(x / y)))
    }

    fn complexes(x: Complex64, y: Complex64, _config: &Config) -> Option<EvalResult<Value>> {
        if y.is_zero() {
            return Some(Err(EvalError::division_by_zero(Self::NAME)));
        }
        Some(Ok(Value::Complex(x / y)))
    }

    fn bignumbers(x: &BigRational, y: &BigRational, _config: &Config) -> Option<EvalResult<Value>> {
        if y.is_zero() {
            return Some(Err(EvalError::division_by_zero(Self::NAME)));
        }
        Some(Ok(Value::BigNumber(x / y)))
    }

    fn units(x: &Unit, y: &Unit, config: &Config) -> Option<EvalResult<Value>> {
        if let Err(error) = same_base(Self::NAME, x, y) {
            return Some(Err(error));
        }
        Self::numbers(x.si_value(), y.si_value(), config)
    }

    fn unit_number(x: &Unit, y: f64) -> Option<EvalResult<Value>> {
        if y == 0.0 {
            return Some(Err(EvalError::division_by_zero(Self::NAME)));
        }
        Some(Ok(Value::Unit(x.with_si_value(x.si_value() / y))))
    }
}

/// `mod`: the remainder takes the sign of the divisor, so `-7 % 3` is `2`.
pub struct Mod;

impl BinaryRule for Mod {
    const NAME: &'static str = "mod";

    fn numbers(x: f64, y: f64, _config: &Config) -> Option<EvalResult<Value>> {
        if y == 0.0 {
            return Some(Err(EvalError::division_by_zero(Self::NAME)));
        }
        Some(Ok(Value::Number(x - y * (x / y).floor())))
    }

    fn bignumbers(x: &BigRational, y: &BigRational, _config: &Config) -> Option<EvalResult<Value>> {
        if y.is_zero() {
            return Some(Err(EvalError::division_by_zero(Self::NAME)));
        }
        Some(Ok(Value::BigNumber(x - y * (x / y).floor())))
    }
}
