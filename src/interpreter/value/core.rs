use std::{fmt, rc::Rc};

use num_complex::Complex64;
use num_rational::BigRational;

use crate::interpreter::{
    dispatch::core::EvalResult,
    value::{big, complex::Displayed, function::Function, unit::Unit},
};

/// Represents a runtime value.
///
/// Every operand, result, and scope entry is one of these kinds. Dispatch
/// decisions are made on [`Value::kind`] alone.
#[derive(Debug, Clone)]
pub enum Value {
    /// A double precision floating point number.
    Number(f64),
    /// An exact arbitrary-precision rational.
    BigNumber(BigRational),
    /// A complex number.
    Complex(Complex64),
    /// A physical quantity or bare unit.
    Unit(Unit),
    /// `true` or `false`.
    Boolean(bool),
    /// A string of text.
    String(String),
    /// A collection; nested arrays form matrices.
    Array(Rc<Vec<Self>>),
    /// Something callable.
    Function(Rc<Function>),
}

/// The kind of a [`Value`], used for dispatch and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// [`Value::Number`].
    Number,
    /// [`Value::BigNumber`].
    BigNumber,
    /// [`Value::Complex`].
    Complex,
    /// [`Value::Unit`].
    Unit,
    /// [`Value::Boolean`].
    Boolean,
    /// [`Value::String`].
    String,
    /// [`Value::Array`].
    Array,
    /// [`Value::Function`].
    Function,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::BigNumber => "bignumber",
            Self::Complex => "complex",
            Self::Unit => "unit",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Array => "array",
            Self::Function => "function",
        };
        write!(f, "{name}")
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<Complex64> for Value {
    fn from(c: Complex64) -> Self {
        Self::Complex(c)
    }
}

impl From<BigRational> for Value {
    fn from(r: BigRational) -> Self {
        Self::BigNumber(r)
    }
}

impl From<Unit> for Value {
    fn from(u: Unit) -> Self {
        Self::Unit(u)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Self::Function(Rc::new(f))
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Number(_) => Kind::Number,
            Self::BigNumber(_) => Kind::BigNumber,
            Self::Complex(_) => Kind::Complex,
            Self::Unit(_) => Kind::Unit,
            Self::Boolean(_) => Kind::Boolean,
            Self::String(_) => Kind::String,
            Self::Array(_) => Kind::Array,
            Self::Function(_) => Kind::Function,
        }
    }

    /// Wraps a host closure as a callable value.
    ///
    /// The closure receives the evaluated arguments and may fail with any
    /// [`EvalError`](crate::EvalError).
    ///
    /// # Example
    /// ```
    /// use mathexpr::{Engine, Value};
    ///
    /// let mut engine = Engine::new();
    /// engine.set("hello",
    ///            Value::native("hello", |args| Ok(Value::from(format!("hello, {}!", args[0])))));
    ///
    /// let greeting = engine.eval(r#"hello(3)"#).unwrap();
    /// assert_eq!(greeting, Some(Value::from("hello, 3!")));
    /// ```
    pub fn native(name: &str, func: impl Fn(&[Self]) -> EvalResult<Self> + 'static) -> Self {
        Function::Native { name: name.to_string(),
                           func: Box::new(func), }.into()
    }

    /// Returns `true` if the value is [`Value::Array`].
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns the plain number held by a `Number` or `Boolean`, if any.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Boolean(b) => Some(f64::from(u8::from(*b))),
            _ => None,
        }
    }

    /// Returns the elements of an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::BigNumber(a), Self::BigNumber(b)) => a == b,
            (Self::Complex(a), Self::Complex(b)) => a == b,
            (Self::Unit(a), Self::Unit(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Formats a plain number, spelling out the non-finite values.
///
/// # Example
/// ```
/// use mathexpr::interpreter::value::core::format_number;
///
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(-f64::INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{value}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::BigNumber(r) => write!(f, "{}", big::format(r)),
            Self::Complex(c) => write!(f, "{}", Displayed(*c)),
            Self::Unit(u) => write!(f, "{u}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Function(func) => write!(f, "{func}"),
        }
    }
}
