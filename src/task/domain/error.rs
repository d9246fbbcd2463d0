//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is not positive.
    #[error("invalid task identifier {0}, expected a positive integer")]
    InvalidTaskId(i64),

    /// The user identifier is not positive.
    #[error("invalid user identifier {0}, expected a positive integer")]
    InvalidUserId(i64),

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,
}

/// Error returned while parsing task status codes from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status code: {0}")]
pub struct ParseTaskStatusError(pub i16);
