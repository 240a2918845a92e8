/// Arbitrary-precision number helpers.
///
/// Big numbers are exact rationals (`num_rational::BigRational`). This module
/// parses decimal literals into them, formats them back as decimals, and
/// converts them to and from `f64` for operations that have no exact rule.
pub mod big;
/// Complex number formatting and comparison helpers for `Complex64`.
pub mod complex;
/// Callable values.
///
/// Defines [`Function`](function::Function), the payload of
/// `Value::Function`: user functions compiled from definitions, host closures
/// registered by the embedding program, and builtin operations used as values.
pub mod function;
/// Physical units.
///
/// A small static table of units grouped by base dimension (length, mass,
/// time, angle, ...). Unit values are stored in SI and converted for display.
pub mod unit;

pub mod core;
