use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, TokenStream},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call arguments, index lists and parameter lists.
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, if something other than
/// a comma or the closing token follows an item, or if the stream ends first.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    tokens: &mut TokenStream<'_>,
    parse_item: impl Fn(&mut TokenStream<'_>) -> ParseResult<T>,
    closing: &Token)
    -> Result<Vec<T>, ParseError>
{
    let mut items = Vec::new();
    if tokens.next_is(closing) {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            _ => return Err(tokens.unexpected(&format!("',' or {closing}"))),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier(tokens: &mut TokenStream<'_>)
                                                       -> ParseResult<String> {
    match tokens.peek() {
        Some((Token::Identifier(name), _)) => {
            tokens.next();
            Ok(name.clone())
        },
        _ => Err(tokens.unexpected("an identifier")),
    }
}

/// Returns `true` if the token can begin a primary expression, and so
/// triggers implicit multiplication after an operand.
pub(in crate::interpreter::parser) const fn starts_operand(token: &Token) -> bool {
    matches!(token, Token::Number(_) | Token::Identifier(_) | Token::LParen)
}
