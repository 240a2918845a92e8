/// The operation table, arity checks and the `dispatch` entry point.
pub mod core;

/// Kind promotion between mismatched operands.
///
/// Booleans become numbers, numbers become big numbers next to a big number,
/// and real kinds become complex next to a complex number.
pub mod promote;

/// Element-wise application over collections.
///
/// Broadcasting of unary and binary functions over nested arrays, plus the
/// shape helpers (`size`, `transpose`) that depend on rectangular arrays.
pub mod collection;

/// Binary operators.
///
/// Each operator is a [`BinaryRule`](binary::core::BinaryRule) with one method
/// per kind pair it supports; `apply_binary` tries the direct rule, then
/// broadcasting, then promotion.
pub mod binary;

/// Prefix and postfix operators: negation, unary plus, not, factorial and
/// transpose.
pub mod unary;

/// Builtin functions callable by name.
pub mod function;

pub use self::core::{EvalResult, Operation, dispatch, lookup};
