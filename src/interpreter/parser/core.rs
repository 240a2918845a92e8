use log::debug;

use crate::{
    ast::Node,
    error::{Error, ParseError},
    interpreter::{
        lexer::{Spanned, Token, tokenize},
        parser::{block::parse_block, statement::parse_assignment},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum depth of nested unary operators, groupings, calls and literals.
pub const MAX_NESTING: usize = 64;

/// A cursor over a token list.
///
/// Besides iteration it offers arbitrary look-ahead, describes the current
/// position for error messages, and counts how deeply the parser has
/// recursed.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens:   &'a [Spanned],
    position: usize,
    depth:    usize,
    end:      usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over `tokens`. `end` is the source length, reported
    /// as the offset of errors at the end of input.
    #[must_use]
    pub const fn new(tokens: &'a [Spanned], end: usize) -> Self {
        Self { tokens,
               position: 0,
               depth: 0,
               end }
    }

    /// The next token, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.position)
    }

    /// The token `n` positions ahead of the next one.
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> Option<&'a Spanned> {
        self.tokens.get(self.position + n)
    }

    /// Returns `true` if the next token equals `token`.
    #[must_use]
    pub fn next_is(&self, token: &Token) -> bool {
        self.peek().is_some_and(|(tok, _)| tok == token)
    }

    /// Offset of the next token, or the source length at the end of input.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.peek().map_or(self.end, |(_, offset)| *offset)
    }

    /// Builds the error for finding something other than `expected` at the
    /// current position.
    #[must_use]
    pub fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some((token, offset)) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                                   found:    token.to_string(),
                                                                   offset:   *offset, },
            None => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                       offset:   self.end, },
        }
    }

    /// Consumes the next token if it equals `token`, failing otherwise.
    pub fn expect(&mut self, token: &Token, expected: &str) -> ParseResult<usize> {
        match self.peek() {
            Some((tok, offset)) if tok == token => {
                self.position += 1;
                Ok(*offset)
            },
            _ => Err(self.unexpected(expected)),
        }
    }

    /// Records one more level of nesting.
    ///
    /// # Errors
    /// Returns [`ParseError::TooDeep`] past [`MAX_NESTING`].
    pub fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::TooDeep { limit:  MAX_NESTING,
                                             offset: self.offset(), });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves a level entered with [`TokenStream::enter`].
    pub const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = &'a Spanned;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing below the statement level.
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := assignment`
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    parse_assignment(tokens)
}

/// Parses a whole token list into one node.
///
/// Several statements become a [`Node::Block`]; a single statement is
/// returned as is; no statements at all give an empty block.
///
/// # Parameters
/// - `tokens`: The output of [`tokenize`](crate::interpreter::lexer::tokenize).
/// - `end`: Length of the source, used as the offset of end-of-input errors.
///
/// # Errors
/// Any [`ParseError`]; the whole input must be consumed.
pub fn parse(tokens: &[Spanned], end: usize) -> ParseResult<Node> {
    let mut stream = TokenStream::new(tokens, end);
    parse_block(&mut stream)
}

/// Tokenizes and parses source text in one step.
///
/// # Errors
/// [`Error::Lex`] for characters the tokenizer rejects, [`Error::Parse`] for
/// malformed expressions.
pub fn parse_source(source: &str) -> Result<Node, Error> {
    let tokens = tokenize(source)?;
    let node = parse(&tokens, source.len())?;
    debug!("parsed {} token(s) into {node}", tokens.len());
    Ok(node)
}
