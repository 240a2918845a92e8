/// Errors raised while turning source text into tokens.
pub mod lex_error;
/// Parsing errors.
///
/// Syntax mistakes detected after tokenization and before compilation:
/// unexpected tokens, premature end of input, malformed function definitions,
/// chained comparisons, and input nested deeper than the parser allows.
pub mod parse_error;
/// Evaluation errors.
///
/// Everything that can go wrong once an expression is compiled: unresolved
/// names, arity mismatches, unsupported kind combinations, dimension
/// mismatches between collections or units, and resource limits.
pub mod runtime_error;

use thiserror::Error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::EvalError;

/// Any failure produced by the engine, tagged with the stage that raised it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The tokenizer rejected the input.
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),
    /// The token stream is not a valid expression.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error("Eval error: {0}")]
    Eval(#[from] EvalError),
}
