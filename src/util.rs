/// Numeric helpers.
///
/// Checked conversions between `f64` and the integer types used for indices,
/// exponents and factorials, plus the tolerance comparison and significant
/// digit rounding shared by dispatch and display code.
///
/// Conversions return a `Result` carrying a caller-supplied error, so each
/// call site reports failures in its own terms.
pub mod num;
