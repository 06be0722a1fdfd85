use thiserror::Error;

use crate::domain::access::errors::AccessError;

/// Error for TaskId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskIdError {
    #[error("Id is required")]
    Empty,

    #[error("Invalid task ID: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all task-related operations
#[derive(Debug, Clone, Error)]
pub enum TaskError {
    #[error("{0}")]
    InvalidTaskId(#[from] TaskIdError),

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("{0}")]
    Validation(String),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Access(#[from] AccessError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
