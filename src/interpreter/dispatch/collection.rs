use log::trace;

use crate::{
    error::EvalError,
    interpreter::{dispatch::core::EvalResult, value::core::Value},
};

/// Applies `f` to every scalar inside `value`, keeping the nesting.
/// A scalar is passed to `f` directly.
pub fn broadcast(value: &Value, f: &dyn Fn(&Value) -> EvalResult<Value>) -> EvalResult<Value> {
    match value {
        Value::Array(items) => {
            let mapped = items.iter()
                              .map(|item| broadcast(item, f))
                              .collect::<EvalResult<Vec<_>>>()?;
            Ok(mapped.into())
        },
        _ => f(value),
    }
}

/// Applies a binary function element-wise.
///
/// Two arrays are combined position by position and must have the same
/// length; an array and a scalar combine every element with the scalar. The
/// function receives the elements, which may themselves be arrays.
///
/// # Errors
/// Returns [`EvalError::DimensionMismatch`] for arrays of different lengths.
///
/// # Example
/// ```
/// use mathexpr::{Config, EvalError, Value, dispatch};
///
/// let config = Config::default();
/// let x = Value::from(vec![Value::Number(1.0), Value::Number(2.0)]);
///
/// let scaled = dispatch("multiply", &[x.clone(), Value::Number(10.0)], &config).unwrap();
/// assert_eq!(scaled, Value::from(vec![Value::Number(10.0), Value::Number(20.0)]));
///
/// let short = Value::from(vec![Value::Number(1.0)]);
/// let error = dispatch("add", &[x, short], &config).unwrap_err();
/// assert!(matches!(error, EvalError::DimensionMismatch { .. }));
/// ```
pub fn broadcast2(name: &str,
                  x: &Value,
                  y: &Value,
                  f: &dyn Fn(&Value, &Value) -> EvalResult<Value>)
                  -> EvalResult<Value> {
    let combined = match (x, y) {
        (Value::Array(left), Value::Array(right)) => {
            if left.len() != right.len() {
                return Err(EvalError::dimensions(name,
                                                 format!("({} != {})", left.len(), right.len())));
            }
            left.iter()
                .zip(right.iter())
                .map(|(a, b)| f(a, b))
                .collect::<EvalResult<Vec<_>>>()?
        },
        (Value::Array(left), _) => left.iter().map(|a| f(a, y)).collect::<EvalResult<Vec<_>>>()?,
        (_, Value::Array(right)) => right.iter().map(|b| f(x, b)).collect::<EvalResult<Vec<_>>>()?,
        _ => return f(x, y),
    };
    trace!("{name}: broadcast over {} element(s)", combined.len());
    Ok(combined.into())
}

/// Returns the dimensions of a value: empty for a scalar, one length per
/// nesting level for an array.
///
/// # Errors
/// Returns [`EvalError::DimensionMismatch`] for ragged arrays, whose rows do
/// not all have the same size.
///
/// # Example
/// ```
/// use mathexpr::{Value, interpreter::dispatch::collection::size};
///
/// let row = |a: f64, b: f64| Value::from(vec![Value::Number(a), Value::Number(b)]);
/// let matrix = Value::from(vec![row(1.0, 2.0), row(3.0, 4.0), row(5.0, 6.0)]);
///
/// assert_eq!(size(&matrix).unwrap(), vec![3, 2]);
/// assert_eq!(size(&Value::Number(1.0)).unwrap(), Vec::<usize>::new());
/// ```
pub fn size(value: &Value) -> EvalResult<Vec<usize>> {
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    let Some(first) = items.first() else {
        return Ok(vec![0]);
    };

    let inner = size(first)?;
    for item in items.iter().skip(1) {
        let other = size(item)?;
        if other != inner {
            let details = format!("rows of different sizes ({inner:?} != {other:?})");
            return Err(EvalError::dimensions("size", details));
        }
    }

    let mut dimensions = Vec::with_capacity(inner.len() + 1);
    dimensions.push(items.len());
    dimensions.extend(inner);
    Ok(dimensions)
}

/// Transposes a two-dimensional array. Scalars and vectors are returned
/// unchanged.
///
/// # Errors
/// Returns [`EvalError::DimensionMismatch`] for ragged arrays or arrays with
/// more than two dimensions.
pub fn transpose(value: &Value) -> EvalResult<Value> {
    let dimensions = size(value)?;
    let &[rows, columns] = dimensions.as_slice() else {
        if dimensions.len() > 2 {
            return Err(EvalError::dimensions("transpose",
                                             format!("expected at most 2 dimensions, got {}",
                                                     dimensions.len())));
        }
        return Ok(value.clone());
    };

    let matrix = value.as_array().unwrap_or_default();
    let transposed = (0..columns).map(|column| {
                                     (0..rows).filter_map(|row| {
                                                  matrix[row].as_array()
                                                             .and_then(|cells| cells.get(column))
                                                             .cloned()
                                              })
                                              .collect::<Vec<_>>()
                                              .into()
                                 })
                                 .collect::<Vec<Value>>();
    Ok(transposed.into())
}
