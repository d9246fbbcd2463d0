//! Shared world state for user deletion BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskdesk::{
    task::{adapters::memory::InMemoryTaskRepository, domain::UserId},
    user::{
        adapters::memory::InMemoryUserRepository,
        domain::UserDeletion,
        services::{UserDeletionError, UserDeletionService},
    },
};

/// Scenario world for user deletion behaviour tests.
pub struct UserDeletionWorld {
    pub tasks: InMemoryTaskRepository,
    pub users: InMemoryUserRepository,
    pub service: UserDeletionService<InMemoryUserRepository>,
    pub last_deletion: Option<Result<UserDeletion, UserDeletionError>>,
}

impl UserDeletionWorld {
    /// Creates a world with empty repositories.
    #[must_use]
    pub fn new() -> Self {
        let tasks = InMemoryTaskRepository::new();
        let users = InMemoryUserRepository::new(tasks.clone());
        let service = UserDeletionService::new(Arc::new(users.clone()));
        Self {
            tasks,
            users,
            service,
            last_deletion: None,
        }
    }

    /// Returns the outcome of the most recent deletion.
    pub fn deletion(&self) -> Result<&UserDeletion, eyre::Report> {
        match self.last_deletion.as_ref() {
            Some(Ok(outcome)) => Ok(outcome),
            Some(Err(err)) => Err(eyre::eyre!("deletion failed: {err}")),
            None => Err(eyre::eyre!("no deletion has been performed")),
        }
    }
}

impl Default for UserDeletionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> UserDeletionWorld {
    UserDeletionWorld::default()
}

/// Converts a scenario placeholder into a user identifier.
pub fn user_id(raw: u64) -> Result<UserId, eyre::Report> {
    let value = i64::try_from(raw).map_err(|err| eyre::eyre!("user id out of range: {err}"))?;
    UserId::new(value).map_err(|err| eyre::eyre!("invalid user id: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
