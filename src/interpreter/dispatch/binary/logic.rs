use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::Zero;

use crate::{
    config::Config,
    interpreter::{
        dispatch::{binary::core::BinaryRule, core::EvalResult},
        value::{core::Value, unit::Unit},
    },
};

/// Truth of a plain number: anything but zero and `NaN`.
pub(crate) fn number_truth(x: f64) -> bool {
    x != 0.0 && !x.is_nan()
}

macro_rules! logic_rule {
    ($rule:ident, $name:literal, $combine:expr) => {
        #[doc = concat!("`", $name, "`: numeric operands are true when non-zero.")]
        pub struct $rule;

        impl BinaryRule for $rule {
            const NAME: &'static str = $name;

            fn numbers(x: f64, y: f64, _config: &Config) -> Option<EvalResult<Value>> {
                Self::booleans(number_truth(x), number_truth(y))
            }

            fn complexes(x: Complex64, y: Complex64, _config: &Config) -> Option<EvalResult<Value>> {
                Self::booleans(!x.is_zero(), !y.is_zero())
            }

            fn bignumbers(x: &BigRational,
                          y: &BigRational,
                          _config: &Config)
                          -> Option<EvalResult<Value>> {
                Self::booleans(!x.is_zero(), !y.is_zero())
            }

            fn units(x: &Unit, y: &Unit, _config: &Config) -> Option<EvalResult<Value>> {
                Self::booleans(number_truth(x.si_value()), number_truth(y.si_value()))
            }

            fn booleans(x: bool, y: bool) -> Option<EvalResult<Value>> {
                let combine: fn(bool, bool) -> bool = $combine;
                Some(Ok(Value::Boolean(combine(x, y))))
            }
        }
    };
}

logic_rule!(And, "and", |x, y| x && y);
logic_rule!(Or, "or", |x, y| x || y);
logic_rule!(Xor, "xor", |x, y| x != y);
