use thiserror::Error;

use crate::term::Var;

/// Errors raised when building or reading substitution environments.
///
/// Errors carry no shared term data, so they are `Send` and `Sync`.
///
/// Unification failure is not an error: [`crate::unify`] reports it as `None`
/// and the search moves on to the next alternative.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The variable already has a binding in this environment
    #[error("variable {var} is already bound to {existing}")]
    AlreadyBound {
        /// The variable being rebound
        var: Var,
        /// The term it is currently bound to, rendered
        existing: String,
    },

    /// Binding the variable would make its variable chain loop back to itself
    #[error("binding {0} would create a cyclic variable chain")]
    CyclicBinding(Var),

    /// The term contains a variable bound to a structure containing itself
    #[error("variable {0} is bound to a term that contains itself")]
    CyclicTerm(Var),
}

/// Result alias for environment operations.
pub type Result<T> = std::result::Result<T, Error>;
