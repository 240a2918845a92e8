/// Shared parser state and the expression entry point.
///
/// Defines the token cursor, the nesting guard, and the top-level `parse`
/// function that turns a token list into a single AST node.
pub mod core;

/// Unary, power, postfix and primary expressions.
///
/// Handles prefix signs and negation, right-associative exponentiation,
/// factorial, transpose and indexing, and the atoms: literals, names, calls,
/// groupings and matrix literals.
pub mod unary;

/// Binary operator precedence levels.
///
/// Implements logical, comparison, conversion, additive and multiplicative
/// levels, including implicit multiplication of adjacent operands.
pub mod binary;

/// Statement sequences separated by newlines or semicolons.
pub mod block;

/// Helpers for lists and identifiers.
pub mod utils;

/// Statement level constructs: function definitions and assignments.
pub mod statement;

pub use self::core::{ParseResult, parse, parse_source};
