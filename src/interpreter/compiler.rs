/// Translation of syntax trees into executable trees.
///
/// Resolves operators to dispatch table entries and converts literals to
/// values according to the configuration.
pub mod core;

/// The executable tree and its evaluation against a scope.
pub mod executable;

pub use self::{
    core::{CompiledExpression, compile},
    executable::Executable,
};
