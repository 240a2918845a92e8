use crate::{
    ast::{BinaryOperator, Node},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            unary::parse_unary,
            utils::starts_operand,
        },
    },
};

/// Maps a token to the binary operator it denotes, if any.
///
/// # Example
/// ```
/// use mathexpr::{ast::BinaryOperator, interpreter::{lexer::Token, parser::binary::token_to_binary_operator}};
///
/// assert_eq!(token_to_binary_operator(&Token::In), Some(BinaryOperator::Convert));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        Token::Xor => Some(BinaryOperator::Xor),
        Token::In | Token::To => Some(BinaryOperator::Convert),
        _ => None,
    }
}

/// Parses one left-associative level: operands from `next_level` joined by
/// any of `operators`.
fn parse_left_associative(tokens: &mut TokenStream<'_>,
                          next_level: fn(&mut TokenStream<'_>) -> ParseResult<Node>,
                          operators: &[BinaryOperator])
                          -> ParseResult<Node> {
    let mut left = next_level(tokens)?;

    while let Some((token, offset)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && operators.contains(&op)
    {
        tokens.next();
        let right = next_level(tokens)?;
        left = Node::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                offset: *offset };
    }

    Ok(left)
}

/// Parses a logical OR expression.
///
/// Grammar: `logical_or := logical_xor ("or" logical_xor)*`
pub(crate) fn parse_logical_or(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    parse_left_associative(tokens, parse_logical_xor, &[BinaryOperator::Or])
}

/// Parses a logical XOR expression.
///
/// Grammar: `logical_xor := logical_and ("xor" logical_and)*`
fn parse_logical_xor(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    parse_left_associative(tokens, parse_logical_and, &[BinaryOperator::Xor])
}

/// Parses a logical AND expression.
///
/// Grammar: `logical_and := comparison ("and" comparison)*`
fn parse_logical_and(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    parse_left_associative(tokens, parse_comparison, &[BinaryOperator::And])
}

/// Parses a comparison.
///
/// Comparisons do not associate: at most one operator is accepted, and a
/// second one is an error rather than a silent `(a < b) < c`.
///
/// Grammar: `comparison := conversion (("==" | "!=" | "<" | "<=" | ">" | ">=") conversion)?`
///
/// # Errors
/// Returns [`ParseError::ChainedComparison`] on a second comparison operator.
fn parse_comparison(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let left = parse_conversion(tokens)?;

    let Some((token, offset)) = tokens.peek() else {
        return Ok(left);
    };
    let Some(op) = token_to_binary_operator(token).filter(|op| op.is_comparison()) else {
        return Ok(left);
    };
    tokens.next();
    let right = parse_conversion(tokens)?;

    if let Some((next, next_offset)) = tokens.peek()
       && token_to_binary_operator(next).is_some_and(BinaryOperator::is_comparison)
    {
        return Err(ParseError::ChainedComparison { offset: *next_offset });
    }

    Ok(Node::BinaryOp { left: Box::new(left),
                        op,
                        right: Box::new(right),
                        offset: *offset })
}

/// Parses a unit conversion such as `2 inch in cm`.
///
/// Grammar: `conversion := additive (("in" | "to") additive)*`
fn parse_conversion(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    parse_left_associative(tokens, parse_additive, &[BinaryOperator::Convert])
}

/// Parses an additive expression.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    parse_left_associative(tokens,
                           parse_multiplicative,
                           &[BinaryOperator::Add, BinaryOperator::Sub])
}

/// Parses a multiplicative expression, including implicit multiplication.
///
/// An operand directly followed by a number, an identifier or `(` is
/// multiplied by it at this precedence, so `2 x^2` is `2 * (x^2)` and
/// `5 cm` is `5 * cm`.
///
/// Grammar: `multiplicative := unary ((("*" | "/" | "%") unary) | unary)*`
fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let mut left = parse_unary(tokens)?;

    while let Some((token, offset)) = tokens.peek() {
        let op = match token {
            Token::Star => BinaryOperator::Mul,
            Token::Slash => BinaryOperator::Div,
            Token::Percent => BinaryOperator::Mod,
            token if starts_operand(token) => {
                let right = parse_unary(tokens)?;
                left = Node::BinaryOp { left: Box::new(left),
                                        op: BinaryOperator::Mul,
                                        right: Box::new(right),
                                        offset: *offset };
                continue;
            },
            _ => break,
        };
        tokens.next();
        let right = parse_unary(tokens)?;
        left = Node::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                offset: *offset };
    }

    Ok(left)
}
