use std::collections::HashMap;

use log::trace;

use crate::{error::EvalError, interpreter::{dispatch::core::EvalResult, value::core::Value}};

/// Maximum number of nested user function calls.
pub const MAX_CALL_DEPTH: usize = 128;

/// A mutable mapping from names to values.
///
/// The global frame persists across evaluations. Each user function call
/// pushes a frame holding its parameters; assignments inside the call land in
/// that frame and vanish when it is popped.
///
/// # Example
/// ```
/// use mathexpr::{Scope, Value};
///
/// let mut scope = Scope::new();
/// scope.set("x", Value::Number(3.0));
/// assert_eq!(scope.get("x"), Some(&Value::Number(3.0)));
///
/// scope.set("x", Value::Number(4.0));
/// assert_eq!(scope.get("x"), Some(&Value::Number(4.0)));
///
/// assert_eq!(scope.remove("x"), Some(Value::Number(4.0)));
/// assert!(scope.get("x").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scope {
    global: HashMap<String, Value>,
    frames: Vec<HashMap<String, Value>>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks a name up, innermost frame first.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name))
            .or_else(|| self.global.get(name))
    }

    /// Binds a name in the innermost frame, replacing any previous binding
    /// there.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let frame = self.frames.last_mut().unwrap_or(&mut self.global);
        frame.insert(name.into(), value.into());
    }

    /// Removes a name from the innermost frame, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let frame = self.frames.last_mut().unwrap_or(&mut self.global);
        frame.remove(name)
    }

    /// Removes every binding from every frame.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.global.clear();
    }

    /// Returns `true` if the name is bound in any frame.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names bound in the global frame, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.global.keys().map(String::as_str)
    }

    /// Number of names bound in the global frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.global.len()
    }

    /// Returns `true` if the global frame is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.global.is_empty()
    }

    /// Number of active call frames.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Enters a function call with its parameter bindings.
    pub(crate) fn push_frame(&mut self, frame: HashMap<String, Value>) -> EvalResult<()> {
        if self.frames.len() >= MAX_CALL_DEPTH {
            return Err(EvalError::RecursionLimit { limit: MAX_CALL_DEPTH });
        }
        self.frames.push(frame);
        trace!("entered call frame {}", self.frames.len());
        Ok(())
    }

    /// Leaves the innermost function call.
    pub(crate) fn pop_frame(&mut self) {
        self.frames.pop();
    }
}
