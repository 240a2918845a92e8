/// Default tolerance for comparisons between plain numbers.
pub const EPSILON: f64 = 1e-14;

/// Which numeric kind number literals compile to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberMode {
    /// Literals become 64-bit floating point numbers.
    #[default]
    Number,
    /// Literals become exact arbitrary-precision rationals.
    BigNumber,
}

/// Numeric configuration bound to a compiled expression.
///
/// The configuration is captured at compile time: changing an engine's
/// configuration does not affect expressions that were already compiled.
///
/// # Example
/// ```
/// use mathexpr::{Config, NumberMode};
///
/// let config = Config::default();
/// assert_eq!(config.number, NumberMode::Number);
/// assert!(config.epsilon > 0.0);
///
/// let exact = Config::bignumber();
/// assert_eq!(exact.number, NumberMode::BigNumber);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Relative tolerance used by equality-style comparisons.
    pub epsilon: f64,
    /// Kind produced by number literals.
    pub number:  NumberMode,
}

impl Default for Config {
    fn default() -> Self {
        Self { epsilon: EPSILON,
               number:  NumberMode::Number, }
    }
}

impl Config {
    /// The default configuration with big-number literals.
    #[must_use]
    pub fn bignumber() -> Self {
        Self { number: NumberMode::BigNumber,
               ..Self::default() }
    }

    /// Returns a copy with a different comparison tolerance.
    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}
