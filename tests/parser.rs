use mathexpr::{
    Error, ParseError,
    ast::{BinaryOperator, Constant, Node},
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::MAX_NESTING,
    },
    parse,
};
use pretty_assertions::assert_eq;

fn shown(source: &str) -> String {
    parse(source).unwrap_or_else(|e| panic!("{source:?} failed: {e}"))
                 .to_string()
}

fn parse_error(source: &str) -> ParseError {
    match parse(source) {
        Err(Error::Parse(e)) => e,
        other => panic!("{source:?} should not parse, got {other:?}"),
    }
}

#[test]
fn tokens_carry_offsets() {
    let tokens = tokenize("x1 = .5e2 # note\n\"s\" != true").unwrap();
    assert_eq!(tokens,
               vec![(Token::Identifier("x1".to_string()), 0),
                    (Token::Equals, 3),
                    (Token::Number(".5e2".to_string()), 5),
                    (Token::NewLine, 16),
                    (Token::Str("s".to_string()), 17),
                    (Token::BangEqual, 21),
                    (Token::Bool(true), 24)]);
}

#[test]
fn keywords_are_not_identifiers() {
    let tokens = tokenize("a and b or not c xor d in e to f").unwrap();
    let kinds = tokens.into_iter().map(|(token, _)| token).collect::<Vec<_>>();
    assert!(kinds.contains(&Token::And));
    assert!(kinds.contains(&Token::Or));
    assert!(kinds.contains(&Token::Not));
    assert!(kinds.contains(&Token::Xor));
    assert!(kinds.contains(&Token::In));
    assert!(kinds.contains(&Token::To));
    assert!(kinds.contains(&Token::Identifier("f".to_string())));
}

#[test]
fn lex_errors_point_at_the_text() {
    let Err(error) = tokenize("1 + @") else {
        panic!("'@' is not a token");
    };
    assert_eq!((error.text.as_str(), error.offset), ("@", 4));
}

#[test]
fn numbers_with_two_fractions_are_rejected() {
    let Err(error) = tokenize("2 * 1.5.3") else {
        panic!("1.5.3 is not a number");
    };
    assert_eq!((error.text.as_str(), error.offset), ("1.5.3", 4));

    assert!(matches!(parse("1.5.3"), Err(Error::Lex(_))));
    assert!(matches!(parse(".5.5"), Err(Error::Lex(_))));
    assert!(matches!(parse("1e5.3"), Err(Error::Lex(_))));
    assert_eq!(shown("1.5 .3"), "1.5 * .3");
}

#[test]
fn precedence() {
    assert_eq!(shown("1 + 2 * 3"), "1 + (2 * 3)");
    assert_eq!(shown("(1 + 2) * 3"), "(1 + 2) * 3");
    assert_eq!(shown("1 - 2 - 3"), "(1 - 2) - 3");
    assert_eq!(shown("2 ^ 3 ^ 2"), "2 ^ (3 ^ 2)");
    assert_eq!(shown("-2 ^ 2"), "-(2 ^ 2)");
    assert_eq!(shown("2 ^ -1"), "2 ^ (-1)");
    assert_eq!(shown("a or b and c"), "a or (b and c)");
    assert_eq!(shown("a or b xor c"), "a or (b xor c)");
    assert_eq!(shown("1 + 2 < 4"), "(1 + 2) < 4");
    assert_eq!(shown("not a == b"), "(not a) == b");
    assert_eq!(shown("1 + 2 inch in cm"), "(1 + (2 * inch)) to cm");
}

#[test]
fn postfix_operators() {
    assert_eq!(shown("n!"), "n!");
    assert_eq!(shown("-n!"), "-(n!)");
    assert_eq!(shown("m'"), "m'");
    assert_eq!(shown("m[1, 2]"), "m[1, 2]");
    assert_eq!(shown("[1, 2; 3, 4]"), "[[1, 2], [3, 4]]");
}

#[test]
fn implicit_multiplication() {
    assert_eq!(shown("2 3"), "2 * 3");
    assert_eq!(shown("2 x^2"), "2 * (x ^ 2)");
    assert_eq!(shown("5 cm"), "5 * cm");
    assert_eq!(shown("2(x + 1)"), "2 * (x + 1)");
    assert_eq!(shown("f (x)"), "f(x)");
}

#[test]
fn statements() {
    assert_eq!(shown("a = b = 2"), "a = b = 2");
    assert_eq!(shown("function f(x, y) = x^y"), "f(x, y) = x ^ y");
    assert_eq!(shown("f(x) = x; f(2)"), "f(x) = x; f(2)");
    assert_eq!(shown("\n\na = 1\n\nb = 2\n"), "a = 1; b = 2");

    let Node::Block { statements, .. } = parse("1; 2; 3").unwrap() else {
        panic!("several statements form a block");
    };
    assert_eq!(statements.len(), 3);
}

#[test]
fn literals_keep_their_text() {
    let Node::BinaryOp { left, op, right, .. } = parse("0.10 == \"x\"").unwrap() else {
        panic!("expected a comparison");
    };
    assert_eq!(op, BinaryOperator::Equal);
    assert!(matches!(*left, Node::Literal { value: Constant::Number(ref text), offset: 0 } if text == "0.10"));
    assert!(matches!(*right, Node::Literal { value: Constant::String(ref text), offset: 8 } if text == "x"));
}

#[test]
fn syntax_errors() {
    assert_eq!(parse_error("1 < 2 < 3"), ParseError::ChainedComparison { offset: 6 });
    assert!(matches!(parse_error("1 +"), ParseError::UnexpectedEndOfInput { offset: 3, .. }));
    assert!(matches!(parse_error("(1 + 2"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error("1 + )"), ParseError::UnexpectedToken { offset: 4, .. }));
    assert!(matches!(parse_error("1 2 )"), ParseError::TrailingTokens { offset: 4, .. }));
    assert!(matches!(parse_error("f(x, x) = x"),
                     ParseError::InvalidFunctionDefinition { .. }));
    assert!(matches!(parse_error("f(1) = 2"), ParseError::InvalidFunctionDefinition { .. }));
    assert!(matches!(parse_error("m[]"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn deep_nesting_is_rejected() {
    let source = format!("{}1{}", "(".repeat(MAX_NESTING * 2), ")".repeat(MAX_NESTING * 2));
    assert!(matches!(parse_error(&source), ParseError::TooDeep { .. }));

    let negations = format!("{}1", "-".repeat(MAX_NESTING * 2));
    assert!(matches!(parse_error(&negations), ParseError::TooDeep { .. }));

    assert!(parse(&format!("{}1{}", "(".repeat(10), ")".repeat(10))).is_ok());
}
