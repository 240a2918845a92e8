//! # mathexpr
//!
//! mathexpr is an embeddable expression engine. It parses short mathematical
//! expressions, compiles them against a numeric configuration, and evaluates
//! them against a mutable scope. Every operator and function dispatches on
//! the kinds of its arguments: plain numbers, big numbers, complex numbers,
//! units, booleans, strings, arrays and functions.
//!
//! ```
//! use mathexpr::Engine;
//!
//! let mut engine = Engine::new();
//! let hypotenuse = engine.eval("sqrt(3^2 + 4^2)").unwrap().unwrap();
//! assert_eq!(hypotenuse.to_string(), "5");
//!
//! let length = engine.eval("2 inch in cm").unwrap().unwrap();
//! assert_eq!(length.to_string(), "5.08 cm");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// The AST is built by the parser and consumed by the compiler. Nodes carry
/// the byte offset of the construct they came from.
pub mod ast;
/// Numeric configuration bound to compiled expressions.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Each stage has its own error enum; [`Error`] wraps them for callers that
/// run the whole pipeline.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, compiler and dispatch layer.
/// - Defines the runtime values and the scope they live in.
/// - Provides the [`Engine`] facade.
pub mod interpreter;
/// General utilities for safe numeric conversion and tolerant comparison.
pub mod util;

pub use crate::{
    ast::Node,
    config::{Config, NumberMode},
    error::{Error, EvalError, LexError, ParseError},
    interpreter::{
        compiler::{CompiledExpression, compile},
        dispatch::dispatch,
        engine::Engine,
        scope::Scope,
        value::core::{Kind, Value},
    },
};

/// Parses source text into a syntax tree.
///
/// # Example
/// ```
/// use mathexpr::{Node, parse};
///
/// assert!(parse("").unwrap().is_empty());
/// assert!(matches!(parse("a = 1").unwrap(), Node::Assignment { .. }));
/// assert!(parse("1 +").is_err());
/// ```
pub fn parse(source: &str) -> Result<Node, Error> {
    interpreter::parser::parse_source(source)
}

/// Evaluates source text in a fresh engine with the default configuration.
///
/// # Example
/// ```
/// use mathexpr::{Value, evaluate};
///
/// assert_eq!(evaluate("x = 4; x!").unwrap(), Some(Value::Number(24.0)));
/// assert_eq!(evaluate("# nothing here").unwrap(), None);
/// ```
pub fn evaluate(source: &str) -> Result<Option<Value>, Error> {
    Engine::new().eval(source)
}
