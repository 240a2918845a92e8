use thiserror::Error;

/// Represents all errors that can occur while parsing a token stream.
///
/// Every variant carries the byte offset of the token where parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token appeared where a different construct was required.
    #[error("Unexpected {found} at offset {offset}, expected {expected}")]
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: String,
        /// Description of the token actually found.
        found:    String,
        /// Byte offset of the token.
        offset:   usize,
    },
    /// The input ended in the middle of a construct.
    #[error("Unexpected end of input at offset {offset}, expected {expected}")]
    UnexpectedEndOfInput {
        /// Description of what the parser was looking for.
        expected: String,
        /// Length of the source.
        offset:   usize,
    },
    /// A complete statement was followed by something that cannot continue it.
    #[error("Unexpected {found} at offset {offset} after a complete statement")]
    TrailingTokens {
        /// Description of the first unconsumed token.
        found:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// Two comparison operators were chained, as in `a < b < c`.
    #[error("Comparison operators cannot be chained (offset {offset})")]
    ChainedComparison {
        /// Byte offset of the second comparison operator.
        offset: usize,
    },
    /// A function definition has a malformed parameter list.
    #[error("Invalid definition of function {name} at offset {offset}: {details}")]
    InvalidFunctionDefinition {
        /// Name of the function being defined.
        name:    String,
        /// What is wrong with the definition.
        details: String,
        /// Byte offset of the definition.
        offset:  usize,
    },
    /// The expression nests deeper than the parser accepts.
    #[error("Expression nested deeper than {limit} levels at offset {offset}")]
    TooDeep {
        /// The nesting limit.
        limit:  usize,
        /// Byte offset where the limit was reached.
        offset: usize,
    },
}
