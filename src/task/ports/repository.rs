//! Repository port for owner-scoped task persistence.

use crate::task::domain::{NewTask, Task, TaskId, TaskSearch, TaskUpdate, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every single-task operation is scoped by both task and user identifier so
/// that a user only ever sees their own tasks.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetches the task matching both identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no such task is owned
    /// by `user_id`.
    async fn get_for_user(&self, task_id: TaskId, user_id: UserId) -> TaskRepositoryResult<Task>;

    /// Returns every task across all users in ascending id order.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks of one user in ascending id order.
    ///
    /// A user without tasks yields an empty list.
    async fn list_by_user(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Searches a user's tasks by name substring and optional status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NoSearchMatches`] when nothing matches.
    /// Unlike [`TaskRepository::list_by_user`], an empty result is an error.
    async fn search(&self, search: &TaskSearch) -> TaskRepositoryResult<Vec<Task>>;

    /// Inserts a task and returns it as persisted.
    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Applies a full-field update and returns the task as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist
    /// for the update's user.
    async fn update(&self, update: &TaskUpdate) -> TaskRepositoryResult<Task>;

    /// Deletes the task matching both identifiers.
    ///
    /// Deleting a task that does not exist is not an error.
    async fn delete(&self, task_id: TaskId, user_id: UserId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// No task with this identifier is owned by the user.
    #[error("Task not found.")]
    NotFound {
        /// Requested task.
        task_id: TaskId,
        /// Requesting user.
        user_id: UserId,
    },

    /// A name search produced no results.
    #[error("No Tasks were found with that name.")]
    NoSearchMatches {
        /// The searched name substring.
        name: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// HTTP-style status code carried by not-found errors.
    pub const NOT_FOUND_STATUS: u16 = 404;

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` for both lookup and search misses.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NoSearchMatches { .. })
    }

    /// Returns the HTTP-style status code for domain errors.
    ///
    /// Persistence failures are opaque and carry no code.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        if self.is_not_found() {
            Some(Self::NOT_FOUND_STATUS)
        } else {
            None
        }
    }
}
