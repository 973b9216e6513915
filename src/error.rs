//! Task Errors
//!
//! Failures of task list operations. None of these reach the user.

use std::fmt;

use crate::models::TaskId;

/// Common result type for task list operations
pub type TaskResult<T> = Result<T, TaskError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Input was empty after trimming
    EmptyText,
    /// No entry with this id in the list
    NotFound(TaskId),
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::EmptyText => write!(f, "Invalid input: task text is empty"),
            TaskError::NotFound(id) => write!(f, "Not found: task {}", id),
        }
    }
}

impl std::error::Error for TaskError {}
