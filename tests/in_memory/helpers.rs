//! Shared test helpers for in-memory repository integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use taskdesk::{
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{NewTask, Task, TaskStatus, UserId},
        ports::TaskRepository,
    },
    user::adapters::memory::InMemoryUserRepository,
};
use tokio::runtime::Runtime;

/// Provides a tokio runtime for async operations in tests.
#[fixture]
pub fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

/// Provides a fresh in-memory task repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Builds a user identifier, panicking on invalid test input.
pub fn user(value: i64) -> UserId {
    UserId::new(value).expect("valid user id")
}

/// Creates and stores a task owned by `owner`.
pub fn seed(
    rt: &Runtime,
    repo: &InMemoryTaskRepository,
    owner: i64,
    name: &str,
    status: TaskStatus,
) -> Task {
    let new_task = NewTask::new(name, "seeded", status, user(owner), &DefaultClock)
        .expect("valid new task");
    rt.block_on(repo.create(&new_task)).expect("seed task")
}

/// Creates a user registry over `repo` with the given users registered.
pub fn registry(repo: &InMemoryTaskRepository, users: &[i64]) -> InMemoryUserRepository {
    let registry = InMemoryUserRepository::new(repo.clone());
    for id in users {
        registry.register(user(*id)).expect("register user");
    }
    registry
}
