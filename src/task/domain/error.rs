//! Error types for task domain values and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskDomainError {
    /// The completion percentage lies outside `[0, 100]` or is not a number.
    #[error("completion percent {0} is outside the range 0 to 100")]
    PercentOutOfRange(f64),
}

/// Error returned when a window name cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("The value '{0}' is not a valid time window.")]
pub struct ParseWindowError(pub String);
