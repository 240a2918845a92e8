use thiserror::Error;

/// Raised when the tokenizer meets text no token pattern accepts.
///
/// Unknown characters and unterminated string literals both end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized input {text:?} at offset {offset}")]
pub struct LexError {
    /// The offending slice of source text.
    pub text:   String,
    /// Byte offset of the slice in the source.
    pub offset: usize,
}
