/// The `BinaryRule` trait and the binary dispatch algorithm.
pub mod core;

/// `add`, `subtract`, `multiply`, `divide` and `mod`.
pub mod arithmetic;

/// `equal`, `unequal`, the ordering comparisons and `compare`.
pub mod comparison;

/// `and`, `or` and `xor`.
pub mod logic;

/// `pow`.
pub mod power;

/// `to`, unit conversion.
pub mod convert;
