use std::cmp::Ordering;

use num_complex::Complex64;
use num_rational::BigRational;
use ordered_float::OrderedFloat;

use crate::{
    config::Config,
    interpreter::{
        dispatch::{
            binary::core::{BinaryRule, same_base},
            core::EvalResult,
        },
        value::{complex::nearly_equal_complex, core::Value, unit::Unit},
    },
    util::num::nearly_equal,
};

/// Orders two numbers, treating values within the tolerance as equal.
/// `NaN` is unordered.
fn tolerant_ordering(x: f64, y: f64, epsilon: f64) -> Option<Ordering> {
    if nearly_equal(x, y, epsilon) {
        return Some(Ordering::Equal);
    }
    x.partial_cmp(&y)
}

macro_rules! equality_rule {
    ($rule:ident, $name:literal, $expected:literal) => {
        #[doc = concat!("`", $name, "`: tolerant for plain and complex numbers, exact for big \
                         numbers, booleans and strings; units must share a base.")]
        pub struct $rule;

        impl BinaryRule for $rule {
            const NAME: &'static str = $name;

            fn numbers(x: f64, y: f64, config: &Config) -> Option<EvalResult<Value>> {
                Some(Ok(Value::Boolean(nearly_equal(x, y, config.epsilon) == $expected)))
            }

            fn complexes(x: Complex64, y: Complex64, config: &Config) -> Option<EvalResult<Value>> {
                Some(Ok(Value::Boolean(nearly_equal_complex(x, y, config.epsilon) == $expected)))
            }

            fn bignumbers(x: &BigRational,
                          y: &BigRational,
                          _config: &Config)
                          -> Option<EvalResult<Value>> {
                Some(Ok(Value::Boolean((x == y) == $expected)))
            }

            fn units(x: &Unit, y: &Unit, config: &Config) -> Option<EvalResult<Value>> {
                Some(same_base(Self::NAME, x, y).map(|()| {
                    let equal = nearly_equal(x.si_value(), y.si_value(), config.epsilon);
                    Value::Boolean(equal == $expected)
                }))
            }

            fn strings(x: &str, y: &str) -> Option<EvalResult<Value>> {
                Some(Ok(Value::Boolean((x == y) == $expected)))
            }

            fn booleans(x: bool, y: bool) -> Option<EvalResult<Value>> {
                Some(Ok(Value::Boolean((x == y) == $expected)))
            }
        }
    };
}

equality_rule!(Equal, "equal", true);
equality_rule!(Unequal, "unequal", false);

macro_rules! ordering_rule {
    ($rule:ident, $name:literal, $test:path) => {
        #[doc = concat!("`", $name, "`: numbers within the tolerance count as equal; strings \
                         compare lexicographically; units must share a base.")]
        pub struct $rule;

        impl BinaryRule for $rule {
            const NAME: &'static str = $name;

            fn numbers(x: f64, y: f64, config: &Config) -> Option<EvalResult<Value>> {
                let ordering = tolerant_ordering(x, y, config.epsilon);
                Some(Ok(Value::Boolean(ordering.is_some_and($test))))
            }

            fn bignumbers(x: &BigRational,
                          y: &BigRational,
                          _config: &Config)
                          -> Option<EvalResult<Value>> {
                Some(Ok(Value::Boolean($test(x.cmp(y)))))
            }

            fn units(x: &Unit, y: &Unit, config: &Config) -> Option<EvalResult<Value>> {
                if let Err(error) = same_base(Self::NAME, x, y) {
                    return Some(Err(error));
                }
                Self::numbers(x.si_value(), y.si_value(), config)
            }

            fn strings(x: &str, y: &str) -> Option<EvalResult<Value>> {
                Some(Ok(Value::Boolean($test(x.cmp(y)))))
            }
        }
    };
}

ordering_rule!(Smaller, "smaller", Ordering::is_lt);
ordering_rule!(SmallerEq, "smallerEq", Ordering::is_le);
ordering_rule!(Larger, "larger", Ordering::is_gt);
ordering_rule!(LargerEq, "largerEq", Ordering::is_ge);

fn ordering_value(ordering: Ordering) -> Value {
    Value::Number(match ordering {
                      Ordering::Less => -1.0,
                      Ordering::Equal => 0.0,
                      Ordering::Greater => 1.0,
                  })
}

/// `compare`: `-1`, `0` or `1`.
///
/// Plain numbers use a total order in which `NaN` sorts above every other
/// number, so the result is always defined.
pub struct Compare;

impl BinaryRule for Compare {
    const NAME: &'static str = "compare";

    fn numbers(x: f64, y: f64, config: &Config) -> Option<EvalResult<Value>> {
        let ordering = if nearly_equal(x, y, config.epsilon) {
            Ordering::Equal
        } else {
            OrderedFloat(x).cmp(&OrderedFloat(y))
        };
        Some(Ok(ordering_value(ordering)))
    }

    fn bignumbers(x: &BigRational, y: &BigRational, _config: &Config) -> Option<EvalResult<Value>> {
        Some(Ok(ordering_value(x.cmp(y))))
    }

    fn units(x: &Unit, y: &Unit, config: &Config) -> Option<EvalResult<Value>> {
        if let Err(error) = same_base(Self::NAME, x, y) {
            return Some(Err(error));
        }
        Self::numbers(x.si_value(), y.si_value(), config)
    }

    fn strings(x: &str, y: &str) -> Option<EvalResult<Value>> {
        Some(Ok(ordering_value(x.cmp(y))))
    }
}
