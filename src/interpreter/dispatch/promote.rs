use num_complex::Complex64;

use crate::interpreter::value::{big, complex::from_real, core::Value};

/// Returns the real number held by a `Number`, `Boolean` or `BigNumber`.
#[must_use]
pub fn to_real(value: &Value) -> Option<f64> {
    match value {
        Value::BigNumber(r) => Some(big::to_f64(r)),
        _ => value.as_number(),
    }
}

/// Returns the value as a complex number, if it is any numeric kind.
#[must_use]
pub fn to_complex(value: &Value) -> Option<Complex64> {
    match value {
        Value::Complex(c) => Some(*c),
        _ => to_real(value).map(from_real),
    }
}

const fn is_numeric(value: &Value) -> bool {
    matches!(value,
             Value::Number(_)
             | Value::BigNumber(_)
             | Value::Complex(_)
             | Value::Unit(_)
             | Value::Boolean(_))
}

fn boolean_to_number(value: &Value) -> Value {
    match value {
        Value::Boolean(b) => Value::Number(f64::from(u8::from(*b))),
        _ => value.clone(),
    }
}

/// Converts a pair of operands of different kinds to a common kind.
///
/// Promotion runs in one direction only:
/// - a boolean becomes a number when paired with any numeric kind;
/// - a number becomes a big number next to a big number, or the big number
///   is downgraded when the number has no exact decimal form (`NaN`,
///   infinities);
/// - a number or big number becomes complex next to a complex number;
/// - a big number becomes a number next to a unit.
///
/// Returns `None` when no promotion applies, for example between a string
/// and a number.
///
/// # Example
/// ```
/// use mathexpr::{Value, interpreter::dispatch::promote::promote_pair};
///
/// let (x, y) = promote_pair(&Value::Boolean(true), &Value::Number(2.0)).unwrap();
/// assert_eq!((x, y), (Value::Number(1.0), Value::Number(2.0)));
///
/// assert!(promote_pair(&Value::from("2"), &Value::Number(2.0)).is_none());
/// ```
#[must_use]
pub fn promote_pair(x: &Value, y: &Value) -> Option<(Value, Value)> {
    use Value::{BigNumber, Boolean, Complex, Number, Unit};

    let promoted = match (x, y) {
        (Boolean(_), _) if is_numeric(y) => (boolean_to_number(x), boolean_to_number(y)),
        (_, Boolean(_)) if is_numeric(x) => (x.clone(), boolean_to_number(y)),
        (Number(n), BigNumber(r)) => match big::from_f64(*n) {
            Some(promoted) => (BigNumber(promoted), y.clone()),
            None => (x.clone(), Number(big::to_f64(r))),
        },
        (BigNumber(r), Number(n)) => match big::from_f64(*n) {
            Some(promoted) => (x.clone(), BigNumber(promoted)),
            None => (Number(big::to_f64(r)), y.clone()),
        },
        (Number(_) | BigNumber(_), Complex(_)) => (Complex(to_complex(x)?), y.clone()),
        (Complex(_), Number(_) | BigNumber(_)) => (x.clone(), Complex(to_complex(y)?)),
        (BigNumber(r), Unit(_)) => (Number(big::to_f64(r)), y.clone()),
        (Unit(_), BigNumber(r)) => (x.clone(), Number(big::to_f64(r))),
        _ => return None,
    };
    Some(promoted)
}
