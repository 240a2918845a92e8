use std::fmt;

/// Represents a literal value as written in the source.
///
/// Number literals keep their text: the compiler decides whether they become
/// plain or arbitrary-precision numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constant {
    /// A number literal such as `0.1` or `2e3`.
    Number(String),
    /// A string literal, without its quotes.
    String(String),
    /// `true` or `false`.
    Boolean(bool),
}

/// An abstract syntax tree node.
///
/// Every variant records the byte offset of the construct in the source so
/// later stages can point at it.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A literal value.
    Literal {
        /// The constant as written.
        value:  Constant,
        /// Byte offset in the source code.
        offset: usize,
    },
    /// A reference to a variable, constant, function or unit by name.
    Identifier {
        /// The referenced name.
        name:   String,
        /// Byte offset in the source code.
        offset: usize,
    },
    /// A prefix or postfix operation.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
        /// Byte offset in the source code.
        offset:  usize,
    },
    /// An infix operation.
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset in the source code.
        offset: usize,
    },
    /// A function call such as `sqrt(x)`.
    Call {
        /// Name of the callee.
        name:      String,
        /// The argument expressions.
        arguments: Vec<Self>,
        /// Byte offset in the source code.
        offset:    usize,
    },
    /// A definition such as `f(x, y) = x^y`.
    FunctionDefinition {
        /// The defined name.
        name:   String,
        /// Parameter names.
        params: Vec<String>,
        /// The body expression.
        body:   Box<Self>,
        /// Byte offset in the source code.
        offset: usize,
    },
    /// An assignment such as `a = 3`.
    Assignment {
        /// The assigned name.
        name:   String,
        /// The assigned expression.
        value:  Box<Self>,
        /// Byte offset in the source code.
        offset: usize,
    },
    /// Statements separated by newlines or `;`. Evaluates to the value of
    /// the last one. An empty block is the empty expression.
    Block {
        /// The statements, in order.
        statements: Vec<Self>,
        /// Byte offset in the source code.
        offset:     usize,
    },
    /// A collection literal such as `[1, 2, 3]`. Rows of `[1, 2; 3, 4]` are
    /// nested `Matrix` nodes.
    Matrix {
        /// The elements or rows.
        elements: Vec<Self>,
        /// Byte offset in the source code.
        offset:   usize,
    },
    /// One-based indexing such as `a[2]` or `m[1, 2]`.
    Index {
        /// The indexed expression.
        object:  Box<Self>,
        /// One index per dimension.
        indices: Vec<Self>,
        /// Byte offset in the source code.
        offset:  usize,
    },
}

impl Node {
    /// Gets the source offset of `self`.
    /// ## Example
    /// ```
    /// use mathexpr::ast::Node;
    ///
    /// let node = Node::Identifier { name:   "x".to_string(),
    ///                               offset: 5, };
    ///
    /// assert_eq!(node.offset(), 5);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Literal { offset, .. }
            | Self::Identifier { offset, .. }
            | Self::UnaryOp { offset, .. }
            | Self::BinaryOp { offset, .. }
            | Self::Call { offset, .. }
            | Self::FunctionDefinition { offset, .. }
            | Self::Assignment { offset, .. }
            | Self::Block { offset, .. }
            | Self::Matrix { offset, .. }
            | Self::Index { offset, .. } => *offset,
        }
    }

    /// Returns `true` for the empty expression.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Block { statements, .. } if statements.is_empty())
    }

    const fn needs_parentheses(&self) -> bool {
        matches!(self,
                 Self::BinaryOp { .. }
                 | Self::UnaryOp { .. }
                 | Self::Assignment { .. }
                 | Self::FunctionDefinition { .. })
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`, or two adjacent operands)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
    /// Logical exclusive or (`xor`)
    Xor,
    /// Unit conversion (`in` or `to`)
    Convert,
}

impl BinaryOperator {
    /// Returns `true` for the non-associative comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Unary plus (`+x`), which converts booleans to numbers.
    Plus,
    /// Logical not (`!x` or `not x`).
    Not,
    /// Factorial (`x!`).
    Factorial,
    /// Transpose (`x'`).
    Transpose,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Convert => "to",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => write!(f, "{text}"),
            Self::String(text) => write!(f, "\"{text}\""),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    for (index, node) in nodes.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{node}")?;
    }
    Ok(())
}

struct Operand<'a>(&'a Node);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.needs_parentheses() {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Prints the node back as source text, parenthesizing every nested
/// operation so the grouping is explicit.
///
/// # Example
/// ```
/// use mathexpr::parse;
///
/// assert_eq!(parse("1 + 2 3").unwrap().to_string(), "1 + (2 * 3)");
/// assert_eq!(parse("f(x) = -x^2").unwrap().to_string(), "f(x) = -(x ^ 2)");
/// ```
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, operand, .. } => {
                let operand = Operand(operand);
                match op {
                    UnaryOperator::Negate => write!(f, "-{operand}"),
                    UnaryOperator::Plus => write!(f, "+{operand}"),
                    UnaryOperator::Not => write!(f, "not {operand}"),
                    UnaryOperator::Factorial => write!(f, "{operand}!"),
                    UnaryOperator::Transpose => write!(f, "{operand}'"),
                }
            },
            Self::BinaryOp { left, op, right, .. } => {
                write!(f, "{} {op} {}", Operand(left), Operand(right))
            },
            Self::Call { name, arguments, .. } => {
                write!(f, "{name}(")?;
                write_list(f, arguments)?;
                write!(f, ")")
            },
            Self::FunctionDefinition { name, params, body, .. } => {
                write!(f, "{name}({}) = {body}", params.join(", "))
            },
            Self::Assignment { name, value, .. } => write!(f, "{name} = {value}"),
            Self::Block { statements, .. } => {
                for (index, statement) in statements.iter().enumerate() {
                    if index > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{statement}")?;
                }
                Ok(())
            },
            Self::Matrix { elements, .. } => {
                write!(f, "[")?;
                write_list(f, elements)?;
                write!(f, "]")
            },
            Self::Index { object, indices, .. } => {
                write!(f, "{}[", Operand(object))?;
                write_list(f, indices)?;
                write!(f, "]")
            },
        }
    }
}
