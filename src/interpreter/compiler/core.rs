use std::rc::Rc;

use log::debug;

use crate::{
    ast::{BinaryOperator, Constant, Node, UnaryOperator},
    config::{Config, NumberMode},
    interpreter::{
        compiler::executable::Executable,
        dispatch::core::{
            ADD, AND, DIVIDE, EQUAL, EvalResult, FACTORIAL, LARGER, LARGER_EQ, MOD, MULTIPLY, NOT,
            OR, Operation, POW, SMALLER, SMALLER_EQ, SUBTRACT, TO, TRANSPOSE, UNARY_MINUS,
            UNARY_PLUS, UNEQUAL, XOR,
        },
        scope::Scope,
        value::{big, core::Value},
    },
};

/// An expression compiled against a fixed configuration.
///
/// Compilation happens once; the result can be evaluated any number of
/// times against different scopes.
///
/// # Example
/// ```
/// use mathexpr::{Config, Scope, Value, compile, parse};
///
/// let node = parse("x^2 + 1").unwrap();
/// let expression = compile(&node, Config::default());
///
/// let mut scope = Scope::new();
/// for (x, expected) in [(1.0, 2.0), (3.0, 10.0)] {
///     scope.set("x", x);
///     assert_eq!(expression.evaluate(&mut scope), Ok(Some(Value::Number(expected))));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CompiledExpression {
    root:   Executable,
    config: Config,
}

impl CompiledExpression {
    /// Evaluates the expression. Assignments and definitions write into
    /// `scope`.
    ///
    /// Returns `None` for the empty expression.
    pub fn evaluate(&self, scope: &mut Scope) -> EvalResult<Option<Value>> {
        self.root.evaluate(scope, &self.config)
    }

    /// The configuration the expression was compiled with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The root of the executable tree.
    #[must_use]
    pub const fn root(&self) -> &Executable {
        &self.root
    }
}

/// Compiles a syntax tree. Compilation cannot fail: names are resolved when
/// the expression is evaluated.
#[must_use]
pub fn compile(node: &Node, config: Config) -> CompiledExpression {
    let root = compile_node(node, &config);
    debug!("compiled {node} ({:?} literals)", config.number);
    CompiledExpression { root, config }
}

fn compile_node(node: &Node, config: &Config) -> Executable {
    match node {
        Node::Literal { value, .. } => Executable::Constant(literal(value, config)),
        Node::Identifier { name, .. } => Executable::Symbol { name: name.clone() },
        Node::UnaryOp { op, operand, .. } => {
            Executable::Unary { operation: unary_operation(*op),
                                operand:   Box::new(compile_node(operand, config)), }
        },
        Node::BinaryOp { left, op, right, .. } => {
            Executable::Binary { operation: binary_operation(*op),
                                 left:      Box::new(compile_node(left, config)),
                                 right:     Box::new(compile_node(right, config)), }
        },
        Node::Call { name, arguments, .. } => {
            Executable::Call { name:      name.clone(),
                               arguments: compile_all(arguments, config), }
        },
        Node::FunctionDefinition { name, params, body, .. } => {
            Executable::Define { name:   name.clone(),
                                 params: params.iter().cloned().collect::<Rc<[String]>>(),
                                 body:   Rc::new(compile_node(body, config)), }
        },
        Node::Assignment { name, value, .. } => {
            Executable::Assign { name:  name.clone(),
                                 value: Box::new(compile_node(value, config)), }
        },
        Node::Block { statements, .. } => {
            Executable::Block { statements: compile_all(statements, config) }
        },
        Node::Matrix { elements, .. } => {
            Executable::Matrix { elements: compile_all(elements, config) }
        },
        Node::Index { object, indices, .. } => {
            Executable::Index { object:  Box::new(compile_node(object, config)),
                                indices: compile_all(indices, config), }
        },
    }
}

fn compile_all(nodes: &[Node], config: &Config) -> Vec<Executable> {
    nodes.iter().map(|node| compile_node(node, config)).collect()
}

fn literal(constant: &Constant, config: &Config) -> Value {
    match constant {
        Constant::Number(text) => number_literal(text, config.number),
        Constant::String(text) => Value::String(text.clone()),
        Constant::Boolean(b) => Value::Boolean(*b),
    }
}

/// Converts number literal text. Big-number literals whose exponent is too
/// large for an exact value fall back to a plain number.
fn number_literal(text: &str, mode: NumberMode) -> Value {
    let exact = match mode {
        NumberMode::BigNumber => big::parse_decimal(text),
        NumberMode::Number => None,
    };
    exact.map_or_else(|| Value::Number(text.parse().unwrap_or(f64::NAN)), Value::BigNumber)
}

fn unary_operation(op: UnaryOperator) -> &'static Operation {
    match op {
        UnaryOperator::Negate => &UNARY_MINUS,
        UnaryOperator::Plus => &UNARY_PLUS,
        UnaryOperator::Not => &NOT,
        UnaryOperator::Factorial => &FACTORIAL,
        UnaryOperator::Transpose => &TRANSPOSE,
    }
}

fn binary_operation(op: BinaryOperator) -> &'static Operation {
    match op {
        BinaryOperator::Add => &ADD,
        BinaryOperator::Sub => &SUBTRACT,
        BinaryOperator::Mul => &MULTIPLY,
        BinaryOperator::Div => &DIVIDE,
        BinaryOperator::Mod => &MOD,
        BinaryOperator::Pow => &POW,
        BinaryOperator::Less => &SMALLER,
        BinaryOperator::Greater => &LARGER,
        BinaryOperator::LessEqual => &SMALLER_EQ,
        BinaryOperator::GreaterEqual => &LARGER_EQ,
        BinaryOperator::Equal => &EQUAL,
        BinaryOperator::NotEqual => &UNEQUAL,
        BinaryOperator::And => &AND,
        BinaryOperator::Or => &OR,
        BinaryOperator::Xor => &XOR,
        BinaryOperator::Convert => &TO,
    }
}

#[cfg(test)]
mod tests {
    use num_rational::BigRational;

    use super::*;

    #[test]
    fn literals_follow_the_number_mode() {
        assert_eq!(number_literal("0.5", NumberMode::Number), Value::Number(0.5));
        assert_eq!(number_literal(".5", NumberMode::BigNumber),
                   Value::BigNumber(BigRational::new(1.into(), 2.into())));
        assert_eq!(number_literal("1e5000", NumberMode::BigNumber),
                   Value::Number(f64::INFINITY));
    }

    #[test]
    fn operators_resolve_to_table_entries() {
        assert_eq!(binary_operation(BinaryOperator::Convert).name, "to");
        assert_eq!(binary_operation(BinaryOperator::NotEqual).name, "unequal");
        assert_eq!(unary_operation(UnaryOperator::Negate).name, "unaryMinus");
    }
}
