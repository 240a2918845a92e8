use std::{f64::consts, rc::Rc};

use log::trace;
use num_complex::Complex64;

use crate::{
    config::Config,
    error::EvalError,
    interpreter::{
        dispatch::{
            collection,
            core::{EvalResult, Operation, lookup},
        },
        scope::Scope,
        value::{big, core::Value, function::Function, unit::Unit},
    },
    util::num::f64_to_i64_checked,
};

/// A node of a compiled expression.
///
/// Operators are already resolved to dispatch table entries and literals to
/// values; names are looked up in the scope on every evaluation.
#[derive(Debug, Clone)]
pub enum Executable {
    /// A literal value.
    Constant(Value),
    /// A name resolved at evaluation time.
    Symbol {
        /// The referenced name.
        name: String,
    },
    /// A unary operator.
    Unary {
        /// The resolved operation.
        operation: &'static Operation,
        /// The operand.
        operand:   Box<Self>,
    },
    /// A binary operator.
    Binary {
        /// The resolved operation.
        operation: &'static Operation,
        /// Left operand.
        left:      Box<Self>,
        /// Right operand.
        right:     Box<Self>,
    },
    /// A call; the callee is looked up when the call runs.
    Call {
        /// Name of the callee.
        name:      String,
        /// The argument expressions.
        arguments: Vec<Self>,
    },
    /// A function definition.
    Define {
        /// The defined name.
        name:   String,
        /// Parameter names.
        params: Rc<[String]>,
        /// The compiled body, shared with every function value it creates.
        body:   Rc<Self>,
    },
    /// An assignment.
    Assign {
        /// The assigned name.
        name:  String,
        /// The assigned expression.
        value: Box<Self>,
    },
    /// A statement sequence.
    Block {
        /// The statements, in order.
        statements: Vec<Self>,
    },
    /// A collection literal.
    Matrix {
        /// The elements or rows.
        elements: Vec<Self>,
    },
    /// One-based indexing.
    Index {
        /// The indexed expression.
        object:  Box<Self>,
        /// One index per dimension.
        indices: Vec<Self>,
    },
}

/// Stack left when evaluation switches to a fresh segment.
const STACK_RED_ZONE: usize = 128 * 1024;

/// Size of each fresh stack segment.
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;

impl Executable {
    /// Evaluates the node.
    ///
    /// Returns `None` only for an empty block. The native stack grows on
    /// demand, so recursive definitions end with
    /// [`EvalError::RecursionLimit`] however large their bodies are.
    pub fn evaluate(&self, scope: &mut Scope, config: &Config) -> EvalResult<Option<Value>> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || self.evaluate_node(scope, config))
    }

    fn evaluate_node(&self, scope: &mut Scope, config: &Config) -> EvalResult<Option<Value>> {
        match self {
            Self::Constant(value) => Ok(Some(value.clone())),
            Self::Symbol { name } => resolve(name, scope).map(Some),
            Self::Unary { operation, operand } => {
                let operand = operand.evaluate_value(scope, config)?;
                operation.call(&[operand], config).map(Some)
            },
            Self::Binary { operation,
                           left,
                           right, } => {
                let left = left.evaluate_value(scope, config)?;
                let right = right.evaluate_value(scope, config)?;
                operation.call(&[left, right], config).map(Some)
            },
            Self::Call { name, arguments } => {
                let arguments = evaluate_all(arguments, scope, config)?;
                call(name, &arguments, scope, config).map(Some)
            },
            Self::Define { name, params, body } => {
                let function = Value::from(Function::User { name:   name.clone(),
                                                            params: Rc::clone(params),
                                                            body:   Rc::clone(body),
                                                            config: *config, });
                scope.set(name.clone(), function.clone());
                Ok(Some(function))
            },
            Self::Assign { name, value } => {
                let value = value.evaluate_value(scope, config)?;
                trace!("assigning {name} = {value}");
                scope.set(name.clone(), value.clone());
                Ok(Some(value))
            },
            Self::Block { statements } => {
                let mut last = None;
                for statement in statements {
                    last = statement.evaluate(scope, config)?;
                }
                Ok(last)
            },
            Self::Matrix { elements } => {
                let matrix = Value::from(evaluate_all(elements, scope, config)?);
                collection::size(&matrix)?;
                Ok(Some(matrix))
            },
            Self::Index { object, indices } => {
                let object = object.evaluate_value(scope, config)?;
                let indices = evaluate_all(indices, scope, config)?;
                index(&object, &indices).map(Some)
            },
        }
    }

    /// Evaluates the node where a value is required.
    ///
    /// # Errors
    /// Returns [`EvalError::MissingValue`] for an empty block.
    pub fn evaluate_value(&self, scope: &mut Scope, config: &Config) -> EvalResult<Value> {
        self.evaluate(scope, config)?.ok_or(EvalError::MissingValue)
    }
}

fn evaluate_all(nodes: &[Executable], scope: &mut Scope, config: &Config) -> EvalResult<Vec<Value>> {
    nodes.iter().map(|node| node.evaluate_value(scope, config)).collect()
}

/// Looks a name up: scope, then constants, then builtin functions, then
/// units.
fn resolve(name: &str, scope: &Scope) -> EvalResult<Value> {
    if let Some(value) = scope.get(name) {
        return Ok(value.clone());
    }
    if let Some(value) = constant(name) {
        return Ok(value);
    }
    if let Some(operation) = lookup(name) {
        return Ok(Function::Builtin(operation).into());
    }
    if let Some(unit) = Unit::parse(name) {
        trace!("{name} resolved to a unit");
        return Ok(Value::Unit(unit));
    }
    Err(EvalError::UndefinedSymbol { name: name.to_string() })
}

fn constant(name: &str) -> Option<Value> {
    let value = match name {
        "pi" => Value::Number(consts::PI),
        "e" => Value::Number(consts::E),
        "tau" => Value::Number(consts::TAU),
        "i" => Value::Complex(Complex64::i()),
        "Infinity" => Value::Number(f64::INFINITY),
        "NaN" => Value::Number(f64::NAN),
        _ => return None,
    };
    Some(value)
}

/// Calls a function by name: a function bound in the scope first, then a
/// builtin operation.
fn call(name: &str, arguments: &[Value], scope: &mut Scope, config: &Config) -> EvalResult<Value> {
    match scope.get(name) {
        Some(Value::Function(function)) => {
            let function = Rc::clone(function);
            function.call(arguments, scope, config)
        },
        Some(other) => Err(EvalError::NotCallable { name: name.to_string(),
                                                    kind: other.kind(), }),
        None => match lookup(name) {
            Some(operation) => operation.call(arguments, config),
            None => Err(EvalError::UndefinedFunction { name: name.to_string() }),
        },
    }
}

/// Converts a one-based index to a zero-based position below `size`.
fn position(index: &Value, size: usize) -> EvalResult<usize> {
    let invalid = || EvalError::invalid("index", format!("index must be an integer, got {index}"));
    let index = match index {
        Value::Number(n) => f64_to_i64_checked(*n, invalid())?,
        Value::BigNumber(r) => big::to_i64(r).ok_or_else(invalid)?,
        _ => return Err(invalid()),
    };
    usize::try_from(index).ok()
                          .filter(|&i| (1..=size).contains(&i))
                          .map(|i| i - 1)
                          .ok_or(EvalError::IndexOutOfRange { index, size })
}

/// Selects an element of an array, a row of a matrix, or a character of a
/// string.
fn index(object: &Value, indices: &[Value]) -> EvalResult<Value> {
    let Some((first, rest)) = indices.split_first() else {
        return Ok(object.clone());
    };
    match object {
        Value::Array(items) => {
            let item = &items[position(first, items.len())?];
            index(item, rest)
        },
        Value::String(s) if rest.is_empty() => {
            let chars = s.chars().collect::<Vec<_>>();
            Ok(Value::String(chars[position(first, chars.len())?].to_string()))
        },
        _ => Err(EvalError::invalid("index", format!("cannot index a {}", object.kind()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[f64]) -> Value {
        values.iter().copied().map(Value::Number).collect::<Vec<_>>().into()
    }

    #[test]
    fn indexing_is_one_based() {
        let v = numbers(&[10.0, 20.0, 30.0]);
        assert_eq!(index(&v, &[Value::Number(1.0)]), Ok(Value::Number(10.0)));
        assert_eq!(index(&v, &[Value::Number(3.0)]), Ok(Value::Number(30.0)));
        assert_eq!(index(&v, &[Value::Number(0.0)]),
                   Err(EvalError::IndexOutOfRange { index: 0, size: 3 }));
        assert!(matches!(index(&v, &[Value::Number(1.5)]), Err(EvalError::InvalidArgument { .. })));
    }

    #[test]
    fn matrices_take_one_index_per_dimension() {
        let m = Value::from(vec![numbers(&[1.0, 2.0]), numbers(&[3.0, 4.0])]);
        assert_eq!(index(&m, &[Value::Number(2.0), Value::Number(1.0)]), Ok(Value::Number(3.0)));
        assert_eq!(index(&m, &[Value::Number(1.0)]), Ok(numbers(&[1.0, 2.0])));
    }

    #[test]
    fn symbols_fall_back_to_units() {
        let scope = Scope::new();
        assert!(matches!(resolve("cm", &scope), Ok(Value::Unit(_))));
        assert!(matches!(resolve("sqrt", &scope), Ok(Value::Function(_))));
        assert_eq!(resolve("nope", &scope),
                   Err(EvalError::UndefinedSymbol { name: "nope".to_string() }));
    }
}
