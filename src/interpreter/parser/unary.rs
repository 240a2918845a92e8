use std::mem;

use crate::{
    ast::{BinaryOperator, Constant, Node, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (unary plus)
/// - `!` and `not`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`. They bind looser than `^`: `-2^2` is `-(2^2)`.
///
/// Every call counts one level of nesting; groupings, calls and literals all
/// come back through here, so this is where deep input is stopped.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+" | "!" | "not") unary
///            | power
/// ```
pub(crate) fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    tokens.enter()?;
    let node = parse_prefixed(tokens);
    tokens.leave();
    node
}

fn parse_prefixed(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let prefix = match tokens.peek() {
        Some((Token::Minus, offset)) => Some((UnaryOperator::Negate, *offset)),
        Some((Token::Plus, offset)) => Some((UnaryOperator::Plus, *offset)),
        Some((Token::Bang | Token::Not, offset)) => Some((UnaryOperator::Not, *offset)),
        _ => None,
    };

    if let Some((op, offset)) = prefix {
        tokens.next();
        let operand = parse_unary(tokens)?;
        return Ok(Node::UnaryOp { op,
                                  operand: Box::new(operand),
                                  offset });
    }
    parse_power(tokens)
}

/// Parses exponentiation.
///
/// Right associative, and the exponent may carry its own sign:
/// `2^3^2` is `2^(3^2)` and `2^-1` is `2^(-1)`.
///
/// Grammar: `power := postfix ("^" unary)?`
fn parse_power(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let base = parse_postfix(tokens)?;

    if let Some((Token::Caret, offset)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens)?;
        return Ok(Node::BinaryOp { left:   Box::new(base),
                                   op:     BinaryOperator::Pow,
                                   right:  Box::new(exponent),
                                   offset: *offset, });
    }
    Ok(base)
}

/// Parses postfix operators applied to a primary expression.
///
/// 1. **Factorial** `expr!`
/// 2. **Transpose** `expr'`
/// 3. **Indexing** `expr[i]`, `expr[i, j]`, chained as `expr[i][j]`
///
/// Grammar:
/// ```text
///     postfix := primary ("!" | "'" | "[" expression ("," expression)* "]")*
/// ```
fn parse_postfix(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let mut node = parse_primary(tokens)?;

    loop {
        let offset = tokens.offset();
        node = match tokens.peek() {
            Some((Token::Bang, _)) => {
                tokens.next();
                Node::UnaryOp { op: UnaryOperator::Factorial,
                                operand: Box::new(node),
                                offset }
            },
            Some((Token::Apostrophe, _)) => {
                tokens.next();
                Node::UnaryOp { op: UnaryOperator::Transpose,
                                operand: Box::new(node),
                                offset }
            },
            Some((Token::LBracket, _)) => {
                tokens.next();
                if tokens.next_is(&Token::RBracket) {
                    return Err(tokens.unexpected("an index"));
                }
                let indices = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
                Node::Index { object: Box::new(node),
                              indices,
                              offset }
            },
            _ => return Ok(node),
        };
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - number, string and boolean literals
/// - identifiers
/// - function calls; an identifier directly followed by `(` is always a call
/// - parenthesized expressions
/// - matrix literals (`[ ... ]`)
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier ("(" arguments ")")?
///              | "(" expression ")"
///              | "[" rows "]"
/// ```
fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let Some((token, offset)) = tokens.peek() else {
        return Err(tokens.unexpected("an expression"));
    };
    let offset = *offset;

    let literal = |value| Node::Literal { value, offset };
    match token {
        Token::Number(text) => {
            tokens.next();
            Ok(literal(Constant::Number(text.clone())))
        },
        Token::Str(text) => {
            tokens.next();
            Ok(literal(Constant::String(text.clone())))
        },
        Token::Bool(b) => {
            tokens.next();
            Ok(literal(Constant::Boolean(*b)))
        },
        Token::Identifier(name) => {
            tokens.next();
            if tokens.next_is(&Token::LParen) {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                return Ok(Node::Call { name: name.clone(),
                                       arguments,
                                       offset });
            }
            Ok(Node::Identifier { name: name.clone(),
                                  offset })
        },
        Token::LParen => {
            tokens.next();
            let inner = parse_expression(tokens)?;
            tokens.expect(&Token::RParen, "')'")?;
            Ok(inner)
        },
        Token::LBracket => parse_matrix(tokens),
        _ => Err(tokens.unexpected("an expression")),
    }
}

/// Parses a matrix literal.
///
/// Commas separate elements and semicolons separate rows. A literal without
/// semicolons is one-dimensional; otherwise every row becomes a nested
/// `Matrix` node. `[]` is the empty collection.
///
/// Grammar:
/// ```text
///     matrix := "[" "]"
///             | "[" row (";" row)* "]"
///     row    := expression ("," expression)*
/// ```
fn parse_matrix(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let offset = tokens.expect(&Token::LBracket, "'['")?;
    if tokens.next_is(&Token::RBracket) {
        tokens.next();
        return Ok(Node::Matrix { elements: Vec::new(),
                                 offset });
    }

    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut row_offset = tokens.offset();

    loop {
        row.push(parse_expression(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((Token::Semicolon, _)) => {
                tokens.next();
                rows.push(Node::Matrix { elements: mem::take(&mut row),
                                         offset:   row_offset, });
                row_offset = tokens.offset();
            },
            Some((Token::RBracket, _)) => {
                tokens.next();
                break;
            },
            _ => return Err(tokens.unexpected("',', ';' or ']'")),
        }
    }

    if rows.is_empty() {
        return Ok(Node::Matrix { elements: row,
                                 offset });
    }
    rows.push(Node::Matrix { elements: row,
                             offset:   row_offset, });
    Ok(Node::Matrix { elements: rows,
                      offset })
}
