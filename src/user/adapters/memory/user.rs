//! In-memory user repository sharing task storage with the task adapter.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use crate::task::adapters::memory::InMemoryTaskRepository;
use crate::user::{
    domain::{UserDeletion, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
///
/// Task removal goes through the wrapped [`InMemoryTaskRepository`], so
/// callers observe deletions through either handle.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeSet<UserId>>>,
    tasks: InMemoryTaskRepository,
}

impl InMemoryUserRepository {
    /// Creates an empty user registry backed by `tasks`.
    #[must_use]
    pub fn new(tasks: InMemoryTaskRepository) -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeSet::new())),
            tasks,
        }
    }

    /// Records a user, returning `false` if it was already known.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] if the registry lock is
    /// poisoned.
    pub fn register(&self, user_id: UserId) -> UserRepositoryResult<bool> {
        let mut users = self.users.write().map_err(lock_error)?;
        Ok(users.insert(user_id))
    }

    /// Returns whether a user record exists.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] if the registry lock is
    /// poisoned.
    pub fn contains(&self, user_id: UserId) -> UserRepositoryResult<bool> {
        let users = self.users.read().map_err(lock_error)?;
        Ok(users.contains(&user_id))
    }

    /// Returns the task repository this registry cascades into.
    #[must_use]
    pub const fn tasks(&self) -> &InMemoryTaskRepository {
        &self.tasks
    }
}

fn lock_error(err: impl std::fmt::Display) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn delete_user_tasks(&self, user_id: UserId) -> UserRepositoryResult<u64> {
        self.tasks
            .remove_owned_by(user_id)
            .map_err(UserRepositoryError::persistence)
    }

    async fn delete_user(&self, user_id: UserId) -> UserRepositoryResult<bool> {
        let mut users = self.users.write().map_err(lock_error)?;
        Ok(users.remove(&user_id))
    }

    async fn delete_user_with_tasks(&self, user_id: UserId) -> UserRepositoryResult<UserDeletion> {
        // Holding the registry lock keeps both steps invisible until done.
        let mut users = self.users.write().map_err(lock_error)?;
        let tasks_removed = self
            .tasks
            .remove_owned_by(user_id)
            .map_err(UserRepositoryError::persistence)?;
        let user_removed = users.remove(&user_id);
        Ok(UserDeletion {
            user_id,
            tasks_removed,
            user_removed,
        })
    }
}
