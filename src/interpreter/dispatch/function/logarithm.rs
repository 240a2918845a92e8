use crate::{
    config::Config,
    error::EvalError,
    interpreter::{
        dispatch::{
            binary::{arithmetic::Divide, core::apply_binary},
            collection::{broadcast, broadcast2},
            core::EvalResult,
            promote::to_real,
        },
        value::{complex::from_real, core::Value},
    },
};

fn natural(x: &Value) -> EvalResult<Value> {
    match x {
        Value::Complex(c) => Ok(Value::Complex(c.ln())),
        _ => match to_real(x) {
            Some(n) if n < 0.0 => Ok(Value::Complex(from_real(n).ln())),
            Some(n) => Ok(Value::Number(n.ln())),
            None => Err(EvalError::unsupported("log", &[x])),
        },
    }
}

/// `log(x)` is the natural logarithm; `log(x, base)` divides by the
/// logarithm of the base.
///
/// Negative arguments give complex results. A base of one is a division by
/// zero.
///
/// # Example
/// ```
/// use mathexpr::{Config, Value, interpreter::dispatch::function::logarithm::log};
///
/// let config = Config::default();
/// let r = log(&[Value::Number(8.0), Value::Number(2.0)], &config).unwrap();
///
/// assert_eq!(r, Value::Number(3.0));
/// ```
pub fn log(args: &[Value], config: &Config) -> EvalResult<Value> {
    match args {
        [x] => broadcast(x, &natural),
        [x, base] => broadcast2("log", x, base, &|x, base| {
            let numerator = broadcast(x, &natural)?;
            let denominator = broadcast(base, &natural)?;
            apply_binary::<Divide>(&numerator, &denominator, config)
        }),
        _ => Err(EvalError::Arguments { name:     "log".to_string(),
                                        given:    args.len(),
                                        expected: "1 or 2".to_string(), }),
    }
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;

    use super::*;

    #[test]
    fn negative_input_is_complex() {
        let r = log(&[Value::Number(-1.0)], &Config::default()).unwrap();
        assert_eq!(r, Value::Complex(Complex64::new(0.0, std::f64::consts::PI)));
    }

    #[test]
    fn base_one_divides_by_zero() {
        let error = log(&[Value::Number(5.0), Value::Number(1.0)], &Config::default()).unwrap_err();
        assert!(matches!(error, EvalError::DivisionByZero { .. }));
    }
}
