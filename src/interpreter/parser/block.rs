use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            statement::parse_statement,
        },
    },
};

/// Parses statements separated by newlines or semicolons until the end of
/// input.
///
/// Empty statements are skipped. A single statement is returned unwrapped;
/// zero or several statements produce a [`Node::Block`].
///
/// # Errors
/// Returns [`ParseError::TrailingTokens`] when a statement is followed by
/// anything other than a separator.
pub fn parse_block(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let offset = tokens.offset();
    let mut statements = Vec::new();

    loop {
        while matches!(tokens.peek(), Some((Token::NewLine | Token::Semicolon, _))) {
            tokens.next();
        }
        if tokens.peek().is_none() {
            break;
        }

        statements.push(parse_statement(tokens)?);

        match tokens.peek() {
            None | Some((Token::NewLine | Token::Semicolon, _)) => {},
            Some((token, offset)) => {
                return Err(ParseError::TrailingTokens { found:  token.to_string(),
                                                        offset: *offset, });
            },
        }
    }

    if statements.len() == 1
       && let Some(statement) = statements.pop()
    {
        return Ok(statement);
    }
    Ok(Node::Block { statements,
                     offset })
}
