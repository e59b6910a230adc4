//! Roster error types.

use thiserror::Error;

/// Roster validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Empty name, or a name already on the roster
    #[error("Team \"{0}\" already exists or invalid name.")]
    DuplicateOrInvalidName(String),

    /// Position outside the roster, or an unacceptable new name
    #[error("Invalid index or name.")]
    InvalidIndexOrName { index: usize, name: String },

    /// Position outside the roster
    #[error("Invalid index.")]
    InvalidIndex(usize),
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
