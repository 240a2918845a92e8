use std::fmt;

use logos::{Lexer, Logos};

use crate::error::LexError;

/// A token paired with the byte offset where it starts.
pub type Spanned = (Token, usize);

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    ///
    /// The source text is kept so the compiler can build either a plain or
    /// an arbitrary-precision number from it. A second fraction, as in
    /// `1.5.3`, is an error.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", number)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", number)]
    #[regex(r"[0-9]+", number)]
    Number(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// Double-quoted string literals. There are no escape sequences.
    #[token("\"", string_literal)]
    Str(String),
    /// `function`
    #[token("function")]
    Function,
    /// `xor`
    #[token("xor")]
    Xor,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `in`
    #[token("in")]
    In,
    /// `to`
    #[token("to")]
    To,
    /// Identifier tokens; variable, function, constant or unit names such as
    /// `x`, `sqrt` or `cm`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", slice)]
    Identifier(String),
    /// `# Comments` running to the end of the line.
    #[token("#", comment)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,
    /// `'`
    #[token("'")]
    Apostrophe,
    /// Statement separator.
    #[token("\n")]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

fn slice(lex: &mut Lexer<Token>) -> String {
    lex.slice().to_string()
}

/// Keeps a number's text, rejecting it when another `.digit` follows.
///
/// The rejected run of digits and points is consumed so the error shows the
/// whole malformed literal.
fn number(lex: &mut Lexer<Token>) -> Option<String> {
    let rest = lex.remainder().as_bytes();
    if rest.first() == Some(&b'.') && rest.get(1).is_some_and(u8::is_ascii_digit) {
        let run = rest.iter().take_while(|&&b| b == b'.' || b.is_ascii_digit()).count();
        lex.bump(run);
        return None;
    }
    Some(lex.slice().to_string())
}

/// Consumes a string literal after its opening quote.
///
/// Returns `None`, which the lexer reports as an error, when the closing quote
/// is missing.
fn string_literal(lex: &mut Lexer<Token>) -> Option<String> {
    let remainder = lex.remainder();
    let end = remainder.find('"')?;
    let text = remainder[..end].to_string();
    lex.bump(end + 1);
    Some(text)
}

fn comment(lex: &mut Lexer<Token>) -> logos::Skip {
    let remainder = lex.remainder();
    lex.bump(remainder.find('\n').unwrap_or(remainder.len()));
    logos::Skip
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => write!(f, "number {text}"),
            Self::Bool(b) => write!(f, "boolean {b}"),
            Self::Str(text) => write!(f, "string \"{text}\""),
            Self::Identifier(name) => write!(f, "identifier {name}"),
            Self::Function => write!(f, "'function'"),
            Self::Xor => write!(f, "'xor'"),
            Self::And => write!(f, "'and'"),
            Self::Or => write!(f, "'or'"),
            Self::Not => write!(f, "'not'"),
            Self::In => write!(f, "'in'"),
            Self::To => write!(f, "'to'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Caret => write!(f, "'^'"),
            Self::Percent => write!(f, "'%'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::Comma => write!(f, "','"),
            Self::Semicolon => write!(f, "';'"),
            Self::Equals => write!(f, "'='"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::LessEqual => write!(f, "'<='"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::Bang => write!(f, "'!'"),
            Self::Apostrophe => write!(f, "'''"),
            Self::NewLine => write!(f, "newline"),
            Self::Comment | Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Splits source text into tokens with their byte offsets.
///
/// # Errors
/// Returns a [`LexError`] at the first character no token accepts, including
/// the opening quote of an unterminated string.
///
/// # Example
/// ```
/// use mathexpr::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 inch # a comment").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number("2".into()), 0), (Token::Identifier("inch".into()), 2)]);
///
/// assert!(tokenize("1 $ 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(LexError { text:   lexer.slice().to_string(),
                                  offset: lexer.span().start, });
        }
    }

    Ok(tokens)
}
