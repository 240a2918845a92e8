use std::fmt;

use log::trace;

use crate::{
    config::Config,
    error::EvalError,
    interpreter::{
        dispatch::{
            binary::{
                arithmetic::{Add, Divide, Mod, Multiply, Subtract},
                comparison::{Compare, Equal, Larger, LargerEq, Smaller, SmallerEq, Unequal},
                convert::To,
                core::apply_rule,
                logic::{And, Or, Xor},
                power::Pow,
            },
            function::{builtin, convert, logarithm, sqrt},
            unary,
        },
        value::core::Value,
    },
};

/// Result type used by dispatch and evaluation.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Signature shared by every operation implementation.
pub type OperationFn = fn(&[Value], &Config) -> EvalResult<Value>;

/// Arity of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any of the listed argument counts.
    OneOf(&'static [usize]),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(counts) => counts.contains(&n),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(m) => write!(f, "{m}"),
            Self::OneOf(counts) => {
                let counts = counts.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{}", counts.join(" or "))
            },
        }
    }
}

/// A named, polymorphic operation: an operator or a builtin function.
#[derive(Debug)]
pub struct Operation {
    /// The name used for lookup and in messages.
    pub name:  &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    /// The implementation.
    pub func:  OperationFn,
}

impl Operation {
    /// Checks the argument count and runs the operation.
    ///
    /// # Errors
    /// Returns [`EvalError::Arguments`] on an arity mismatch, and whatever the
    /// implementation raises.
    pub fn call(&self, args: &[Value], config: &Config) -> EvalResult<Value> {
        if !self.arity.check(args.len()) {
            return Err(EvalError::Arguments { name:     self.name.to_string(),
                                              given:    args.len(),
                                              expected: self.arity.to_string(), });
        }
        (self.func)(args, config)
    }
}

macro_rules! operations {
    (
        $(
            $ident:ident = $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        $(
            #[doc = concat!("The `", $name, "` operation.")]
            pub static $ident: Operation = Operation { name: $name, arity: $arity, func: $func };
        )*
        static TABLE: &[&Operation] = &[
            $(
                &$ident,
            )*
        ];
        /// Names of every operation, in table order.
        pub const OPERATION_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

operations! {
    ADD         = "add"        => { arity: Arity::Exact(2), func: apply_rule::<Add> },
    SUBTRACT    = "subtract"   => { arity: Arity::Exact(2), func: apply_rule::<Subtract> },
    MULTIPLY    = "multiply"   => { arity: Arity::Exact(2), func: apply_rule::<Multiply> },
    DIVIDE      = "divide"     => { arity: Arity::Exact(2), func: apply_rule::<Divide> },
    MOD         = "mod"        => { arity: Arity::Exact(2), func: apply_rule::<Mod> },
    POW         = "pow"        => { arity: Arity::Exact(2), func: apply_rule::<Pow> },
    UNARY_MINUS = "unaryMinus" => { arity: Arity::Exact(1), func: unary::unary_minus },
    UNARY_PLUS  = "unaryPlus"  => { arity: Arity::Exact(1), func: unary::unary_plus },
    NOT         = "not"        => { arity: Arity::Exact(1), func: unary::not },
    FACTORIAL   = "factorial"  => { arity: Arity::Exact(1), func: unary::factorial },
    TRANSPOSE   = "transpose"  => { arity: Arity::Exact(1), func: unary::transpose },
    EQUAL       = "equal"      => { arity: Arity::Exact(2), func: apply_rule::<Equal> },
    UNEQUAL     = "unequal"    => { arity: Arity::Exact(2), func: apply_rule::<Unequal> },
    SMALLER     = "smaller"    => { arity: Arity::Exact(2), func: apply_rule::<Smaller> },
    SMALLER_EQ  = "smallerEq"  => { arity: Arity::Exact(2), func: apply_rule::<SmallerEq> },
    LARGER      = "larger"     => { arity: Arity::Exact(2), func: apply_rule::<Larger> },
    LARGER_EQ   = "largerEq"   => { arity: Arity::Exact(2), func: apply_rule::<LargerEq> },
    COMPARE     = "compare"    => { arity: Arity::Exact(2), func: apply_rule::<Compare> },
    AND         = "and"        => { arity: Arity::Exact(2), func: apply_rule::<And> },
    OR          = "or"         => { arity: Arity::Exact(2), func: apply_rule::<Or> },
    XOR         = "xor"        => { arity: Arity::Exact(2), func: apply_rule::<Xor> },
    TO          = "to"         => { arity: Arity::Exact(2), func: apply_rule::<To> },
    ABS         = "abs"        => { arity: Arity::Exact(1), func: builtin::abs },
    SQRT        = "sqrt"       => { arity: Arity::Exact(1), func: sqrt::sqrt },
    EXP         = "exp"        => { arity: Arity::Exact(1), func: builtin::exp },
    LOG         = "log"        => { arity: Arity::OneOf(&[1, 2]), func: logarithm::log },
    SIN         = "sin"        => { arity: Arity::Exact(1), func: builtin::sin },
    COS         = "cos"        => { arity: Arity::Exact(1), func: builtin::cos },
    TAN         = "tan"        => { arity: Arity::Exact(1), func: builtin::tan },
    ROUND       = "round"      => { arity: Arity::OneOf(&[1, 2]), func: builtin::round },
    FLOOR       = "floor"      => { arity: Arity::Exact(1), func: builtin::floor },
    CEIL        = "ceil"       => { arity: Arity::Exact(1), func: builtin::ceil },
    RE          = "re"         => { arity: Arity::Exact(1), func: convert::re },
    IM          = "im"         => { arity: Arity::Exact(1), func: convert::im },
    CONJ        = "conj"       => { arity: Arity::Exact(1), func: convert::conj },
    NUMBER      = "number"     => { arity: Arity::Exact(1), func: convert::number },
    BIGNUMBER   = "bignumber"  => { arity: Arity::Exact(1), func: convert::bignumber },
    COMPLEX     = "complex"    => { arity: Arity::OneOf(&[1, 2]), func: convert::complex },
    STRING      = "string"     => { arity: Arity::Exact(1), func: convert::string },
    SIZE        = "size"       => { arity: Arity::Exact(1), func: convert::size },
}

/// Finds an operation by name.
///
/// # Example
/// ```
/// use mathexpr::interpreter::dispatch::{core::Arity, lookup};
///
/// let log = lookup("log").unwrap();
/// assert_eq!(log.arity, Arity::OneOf(&[1, 2]));
/// assert!(lookup("frobnicate").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Operation> {
    TABLE.iter().copied().find(|operation| operation.name == name)
}

/// Invokes the operation registered under `name`.
///
/// # Errors
/// Returns [`EvalError::UndefinedFunction`] for an unknown name,
/// [`EvalError::Arguments`] for a wrong argument count, and whatever the
/// operation raises for the given kinds.
///
/// # Example
/// ```
/// use mathexpr::{Config, EvalError, Value, dispatch};
///
/// let config = Config::default();
/// let sum = dispatch("add", &[Value::Number(2.0), Value::Boolean(true)], &config);
/// assert_eq!(sum, Ok(Value::Number(3.0)));
///
/// let mixed = dispatch("add", &[Value::from("a"), Value::Number(1.0)], &config);
/// assert!(matches!(mixed, Err(EvalError::UnsupportedType { .. })));
/// ```
pub fn dispatch(name: &str, args: &[Value], config: &Config) -> EvalResult<Value> {
    let operation =
        lookup(name).ok_or_else(|| EvalError::UndefinedFunction { name: name.to_string() })?;
    trace!("dispatching {name} over {} argument(s)", args.len());
    operation.call(args, config)
}

/// Extracts the single argument of a unary operation.
pub(crate) fn single<'a>(name: &str, args: &'a [Value]) -> EvalResult<&'a Value> {
    match args {
        [x] => Ok(x),
        _ => Err(EvalError::Arguments { name:     name.to_string(),
                                        given:    args.len(),
                                        expected: "1".to_string(), }),
    }
}
