/// Elementary functions: `abs`, `exp`, trigonometry and rounding.
pub mod builtin;

/// Kind conversions and complex parts: `number`, `bignumber`, `complex`,
/// `string`, `re`, `im`, `conj` and `size`.
pub mod convert;

/// `log`, natural or with a base.
pub mod logarithm;

/// `sqrt`, with complex results for negative inputs.
pub mod sqrt;
