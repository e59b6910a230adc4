//! Schedule error types.

use thiserror::Error;

/// Schedule generation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Not enough teams to generate a schedule. Minimum {min} teams required.")]
    TooFewTeams { min: usize, actual: usize },

    #[error("Too many teams. Maximum {max} teams allowed.")]
    TooManyTeams { max: usize, actual: usize },

    #[error("Minimum teams must be at least 2, got {min}.")]
    MinimumTooLow { min: usize },

    #[error("Maximum teams ({max}) must be at least the minimum ({min}).")]
    MaximumBelowMinimum { min: usize, max: usize },
}

/// Result type for schedule generation
pub type ScheduleResult<T> = Result<T, ScheduleError>;
