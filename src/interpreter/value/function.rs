use std::{collections::HashMap, fmt, rc::Rc};

use log::trace;

use crate::{
    config::Config,
    error::EvalError,
    interpreter::{
        compiler::executable::Executable,
        dispatch::core::{EvalResult, Operation},
        scope::Scope,
        value::core::Value,
    },
};

/// Signature of closures registered by the embedding program.
pub type NativeFn = dyn Fn(&[Value]) -> EvalResult<Value>;

/// A callable value.
pub enum Function {
    /// A function defined in an expression, such as `f(x, y) = x^y`.
    User {
        /// The defined name.
        name:   String,
        /// Parameter names, bound positionally on each call.
        params: Rc<[String]>,
        /// The compiled body.
        body:   Rc<Executable>,
        /// Configuration the body was compiled with.
        config: Config,
    },
    /// A closure supplied by the host.
    Native {
        /// Name used in messages and display.
        name: String,
        /// The closure.
        func: Box<NativeFn>,
    },
    /// A builtin operation referenced by name, as in `f = sqrt`.
    Builtin(&'static Operation),
}

impl Function {
    /// The function's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::User { name, .. } | Self::Native { name, .. } => name,
            Self::Builtin(operation) => operation.name,
        }
    }

    /// Calls the function with already evaluated arguments.
    ///
    /// User functions bind their parameters in a new frame pushed onto
    /// `scope`, so they see the caller's variables through the frames below.
    /// Builtins run with the caller's configuration.
    ///
    /// # Errors
    /// Returns [`EvalError::Arguments`] on an arity mismatch,
    /// [`EvalError::RecursionLimit`] when the call stack is too deep, and
    /// whatever the body raises.
    pub fn call(&self, args: &[Value], scope: &mut Scope, config: &Config) -> EvalResult<Value> {
        match self {
            Self::User { name,
                         params,
                         body,
                         config, } => {
                if args.len() != params.len() {
                    return Err(EvalError::Arguments { name:     name.clone(),
                                                      given:    args.len(),
                                                      expected: params.len().to_string(), });
                }
                trace!("calling {name} at depth {}", scope.depth() + 1);

                let frame: HashMap<String, Value> =
                    params.iter().cloned().zip(args.iter().cloned()).collect();
                scope.push_frame(frame)?;
                let result = body.evaluate_value(scope, config);
                scope.pop_frame();
                result
            },
            Self::Native { func, .. } => func(args),
            Self::Builtin(operation) => operation.call(args, config),
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User { name, params, .. } => {
                f.debug_struct("User").field("name", name).field("params", params).finish()
            },
            Self::Native { name, .. } => f.debug_struct("Native").field("name", name).finish(),
            Self::Builtin(operation) => f.debug_tuple("Builtin").field(&operation.name).finish(),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User { name, params, .. } => write!(f, "{name}({})", params.join(", ")),
            Self::Native { name, .. } => write!(f, "{name}(...)"),
            Self::Builtin(operation) => write!(f, "{}", operation.name),
        }
    }
}
