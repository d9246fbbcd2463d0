//! Repository port for user record removal.

use crate::user::domain::{UserDeletion, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract used by the deletion service.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Removes every task owned by the user and returns how many were removed.
    async fn delete_user_tasks(&self, user_id: UserId) -> UserRepositoryResult<u64>;

    /// Removes the user record.
    ///
    /// Returns `false` when no record existed.
    async fn delete_user(&self, user_id: UserId) -> UserRepositoryResult<bool>;

    /// Removes the user's tasks and then the user record.
    ///
    /// The default runs [`UserRepository::delete_user_tasks`] followed by
    /// [`UserRepository::delete_user`] with no atomicity: a failure in the
    /// second step leaves the tasks deleted. Adapters backed by a
    /// transactional store override this to run both steps in one
    /// transaction.
    async fn delete_user_with_tasks(&self, user_id: UserId) -> UserRepositoryResult<UserDeletion> {
        let tasks_removed = self.delete_user_tasks(user_id).await?;
        let user_removed = self.delete_user(user_id).await?;
        Ok(UserDeletion {
            user_id,
            tasks_removed,
            user_removed,
        })
    }
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
