use log::debug;

use crate::{
    ast::Node,
    config::Config,
    error::Error,
    interpreter::{
        compiler::{CompiledExpression, compile},
        parser::parse_source,
        scope::Scope,
        value::core::Value,
    },
};

/// Parses, compiles and evaluates expressions against a persistent scope.
///
/// # Example
/// ```
/// use mathexpr::{Engine, Value};
///
/// let mut engine = Engine::new();
/// engine.eval("a = 3").unwrap();
/// engine.eval("f(x) = x^2 + a").unwrap();
///
/// assert_eq!(engine.eval("f(2)").unwrap(), Some(Value::Number(7.0)));
/// assert_eq!(engine.get("a"), Some(&Value::Number(3.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    scope:  Scope,
    config: Config,
}

impl Engine {
    /// Creates an engine with the default configuration and an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { scope: Scope::new(),
               config }
    }

    /// The configuration new expressions are compiled with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Parses source text into a syntax tree.
    pub fn parse(&self, source: &str) -> Result<Node, Error> {
        parse_source(source)
    }

    /// Parses and compiles source text with the engine's configuration.
    pub fn compile(&self, source: &str) -> Result<CompiledExpression, Error> {
        Ok(compile(&self.parse(source)?, self.config))
    }

    /// Evaluates source text against the engine's scope.
    ///
    /// Returns `None` for source without statements.
    pub fn eval(&mut self, source: &str) -> Result<Option<Value>, Error> {
        let expression = self.compile(source)?;
        let value = expression.evaluate(&mut self.scope)?;
        debug!("evaluated {source:?} to {}",
               value.as_ref().map_or_else(|| "nothing".to_string(), ToString::to_string));
        Ok(value)
    }

    /// Looks up a global name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.scope.get(name)
    }

    /// Binds a global name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.scope.set(name, value);
    }

    /// Removes a global name. Removing an unknown name does nothing.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.scope.remove(name)
    }

    /// Removes every global name.
    pub fn clear(&mut self) {
        self.scope.clear();
    }

    /// The engine's scope.
    #[must_use]
    pub const fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The engine's scope, for evaluating compiled expressions directly.
    pub const fn scope_mut(&mut self) -> &mut Scope {
        &mut self.scope
    }
}
