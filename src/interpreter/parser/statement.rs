use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_logical_or,
            core::{ParseResult, TokenStream, parse_expression},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement is either a function definition or an expression. Definitions
/// are only recognized here, never inside a larger expression.
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    if is_function_definition(tokens) {
        return parse_function_definition(tokens);
    }
    parse_expression(tokens)
}

/// Looks ahead for a function definition.
///
/// A definition either starts with the `function` keyword, or is an
/// identifier followed by a parenthesized list whose matching `)` is directly
/// followed by `=`. The scan stops at the end of the statement.
fn is_function_definition(tokens: &TokenStream<'_>) -> bool {
    match (tokens.peek(), tokens.peek_nth(1)) {
        (Some((Token::Function, _)), _) => true,
        (Some((Token::Identifier(_), _)), Some((Token::LParen, _))) => {
            let mut depth = 1usize;
            let mut index = 2;
            loop {
                match tokens.peek_nth(index) {
                    Some((Token::LParen, _)) => depth += 1,
                    Some((Token::RParen, _)) => {
                        depth -= 1;
                        if depth == 0 {
                            return matches!(tokens.peek_nth(index + 1), Some((Token::Equals, _)));
                        }
                    },
                    None | Some((Token::NewLine | Token::Semicolon, _)) => return false,
                    Some(_) => {},
                }
                index += 1;
            }
        },
        _ => false,
    }
}

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     definition := "function"? identifier "(" params ")" "=" expression
///     params     := (identifier ("," identifier)*)?
/// ```
///
/// # Errors
/// Returns [`ParseError::InvalidFunctionDefinition`] when a parameter is not
/// a plain name or appears twice; other syntax errors as usual.
fn parse_function_definition(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let offset = tokens.offset();
    if tokens.next_is(&Token::Function) {
        tokens.next();
    }

    let name = parse_identifier(tokens)?;
    tokens.expect(&Token::LParen, "'('")?;

    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen).map_err(|error| {
                     ParseError::InvalidFunctionDefinition { name: name.clone(),
                                                             details: error.to_string(),
                                                             offset }
                 })?;

    for (index, param) in params.iter().enumerate() {
        if params[..index].contains(param) {
            return Err(ParseError::InvalidFunctionDefinition { name,
                                                               details: format!("parameter {param} appears twice"),
                                                               offset });
        }
    }

    tokens.expect(&Token::Equals, "'='")?;
    let body = parse_expression(tokens)?;

    Ok(Node::FunctionDefinition { name,
                                  params,
                                  body: Box::new(body),
                                  offset })
}

/// Parses an assignment, or falls through to the logical levels.
///
/// Assignment is right associative: `a = b = 2` assigns 2 to both names.
///
/// Grammar: `assignment := identifier "=" assignment | logical_or`
pub fn parse_assignment(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    if let (Some((Token::Identifier(name), offset)), Some((Token::Equals, _))) =
        (tokens.peek(), tokens.peek_nth(1))
    {
        tokens.next();
        tokens.next();

        tokens.enter()?;
        let value = parse_assignment(tokens);
        tokens.leave();

        return Ok(Node::Assignment { name:   name.clone(),
                                     value:  Box::new(value?),
                                     offset: *offset, });
    }
    parse_logical_or(tokens)
}
