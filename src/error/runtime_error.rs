use thiserror::Error;

use crate::interpreter::value::core::Kind;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A function was called with the wrong number of arguments.
    #[error("Wrong number of arguments in function {name} ({given} provided, {expected} expected)")]
    Arguments {
        /// The function name.
        name:     String,
        /// How many arguments were passed.
        given:    usize,
        /// The accepted argument counts, already formatted.
        expected: String,
    },
    /// No rule exists for the kinds of the arguments, even after promotion.
    #[error("Function {name}({}) is not supported", join_kinds(.kinds))]
    UnsupportedType {
        /// The operation or function name.
        name:  String,
        /// The kinds of the arguments, in order.
        kinds: Vec<Kind>,
    },
    /// Collections of different sizes, or units of different bases, were
    /// combined.
    #[error("Dimension mismatch in {name}: {details}")]
    DimensionMismatch {
        /// The operation or function name.
        name:    String,
        /// Which dimensions disagreed.
        details: String,
    },
    /// A name resolved to nothing in scope, constants, functions or units.
    #[error("Undefined symbol {name}")]
    UndefinedSymbol {
        /// The unresolved name.
        name: String,
    },
    /// A call named neither a scope function nor a builtin.
    #[error("Undefined function {name}")]
    UndefinedFunction {
        /// The unresolved function name.
        name: String,
    },
    /// A call named a scope value that is not a function.
    #[error("{name} is not a function (found {kind})")]
    NotCallable {
        /// The name used as a callee.
        name: String,
        /// The kind the name is bound to.
        kind: Kind,
    },
    /// Division or modulo by zero.
    #[error("Division by zero in {name}")]
    DivisionByZero {
        /// The operation name.
        name: String,
    },
    /// An argument has the right kind but an unusable value.
    #[error("Invalid argument for {name}: {details}")]
    InvalidArgument {
        /// The operation or function name.
        name:    String,
        /// Why the argument was rejected.
        details: String,
    },
    /// An index fell outside a collection.
    #[error("Index {index} out of range (size {size})")]
    IndexOutOfRange {
        /// The one-based index that was requested.
        index: i64,
        /// The length of the indexed dimension.
        size:  usize,
    },
    /// User function calls nested deeper than allowed.
    #[error("Maximum call depth of {limit} exceeded")]
    RecursionLimit {
        /// The depth limit.
        limit: usize,
    },
    /// A statement that must produce a value produced none.
    #[error("Expression did not produce a value")]
    MissingValue,
}

impl EvalError {
    /// Builds an [`EvalError::UnsupportedType`] from the offending arguments.
    #[must_use]
    pub fn unsupported(name: &str, args: &[&crate::Value]) -> Self {
        Self::UnsupportedType { name:  name.to_string(),
                                kinds: args.iter().map(|value| value.kind()).collect(), }
    }

    /// Builds an [`EvalError::InvalidArgument`].
    #[must_use]
    pub fn invalid(name: &str, details: impl Into<String>) -> Self {
        Self::InvalidArgument { name:    name.to_string(),
                                details: details.into(), }
    }

    /// Builds an [`EvalError::DimensionMismatch`].
    #[must_use]
    pub fn dimensions(name: &str, details: impl Into<String>) -> Self {
        Self::DimensionMismatch { name:    name.to_string(),
                                  details: details.into(), }
    }

    /// Builds an [`EvalError::DivisionByZero`].
    #[must_use]
    pub fn division_by_zero(name: &str) -> Self {
        Self::DivisionByZero { name: name.to_string() }
    }
}

fn join_kinds(kinds: &[Kind]) -> String {
    kinds.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
