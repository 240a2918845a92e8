/// The lexer module tokenizes source code for further parsing.
///
/// Produces `(Token, offset)` pairs: number, string and boolean literals,
/// identifiers, keywords, operators and statement separators. Whitespace
/// and `#` comments are skipped.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level,
/// including implicit multiplication, function definitions and statement
/// blocks.
pub mod parser;
/// Compiles syntax trees into executable trees bound to a configuration.
pub mod compiler;
/// The dispatch layer: named operations selected by argument kind.
///
/// # Responsibilities
/// - Keeps the table of operators and builtin functions.
/// - Checks arity, promotes mixed kinds and broadcasts over arrays.
/// - Reports unsupported kind combinations as typed errors.
pub mod dispatch;
/// The value module defines the runtime data types for evaluation.
///
/// Numbers, big numbers, complex numbers, units, booleans, strings, arrays
/// and functions, along with their formatting.
pub mod value;
/// Name bindings used during evaluation.
pub mod scope;
/// The engine facade tying parsing, compilation and evaluation together.
pub mod engine;
