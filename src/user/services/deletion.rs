//! Service removing a user together with every task they own.

use crate::user::{
    domain::{UserDeletion, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for user deletion.
#[derive(Debug, Error)]
pub enum UserDeletionError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for user deletion operations.
pub type UserDeletionResult<T> = Result<T, UserDeletionError>;

/// Deletes users after purging their tasks.
#[derive(Clone)]
pub struct UserDeletionService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> UserDeletionService<R>
where
    R: UserRepository,
{
    /// Creates a new user deletion service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Deletes all tasks owned by `user_id`, then the user record.
    ///
    /// Tasks go first so that no task is left pointing at a missing user.
    /// Deleting an unknown user succeeds with `user_removed == false`.
    ///
    /// # Errors
    ///
    /// Returns [`UserDeletionError::Repository`] when either step fails.
    pub async fn delete(&self, user_id: UserId) -> UserDeletionResult<UserDeletion> {
        let outcome = self.repository.delete_user_with_tasks(user_id).await?;
        info!(
            %user_id,
            tasks_removed = outcome.tasks_removed,
            user_removed = outcome.user_removed,
            "deleted user"
        );
        Ok(outcome)
    }
}
