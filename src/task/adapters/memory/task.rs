//! In-memory repository for task tests and behaviour scenarios.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskSearch, TaskUpdate, UserId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned from a monotonically increasing counter, so
/// iteration order of the backing map matches ascending id order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every task owned by `user_id`, returning how many were removed.
    pub(crate) fn remove_owned_by(&self, user_id: UserId) -> TaskRepositoryResult<u64> {
        let mut state = self.state.write().map_err(lock_error)?;
        let before = state.tasks.len();
        state.tasks.retain(|_, task| task.user_id() != user_id);
        let removed = before.saturating_sub(state.tasks.len());
        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }
}

fn lock_error(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn find_owned(
    state: &InMemoryTaskState,
    task_id: TaskId,
    user_id: UserId,
) -> TaskRepositoryResult<Task> {
    state
        .tasks
        .get(&task_id)
        .filter(|task| task.user_id() == user_id)
        .cloned()
        .ok_or(TaskRepositoryError::NotFound { task_id, user_id })
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn get_for_user(&self, task_id: TaskId, user_id: UserId) -> TaskRepositoryResult<Task> {
        let state = self.state.read().map_err(lock_error)?;
        find_owned(&state, task_id, user_id)
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn list_by_user(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn search(&self, search: &TaskSearch) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let found: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| search.matches(task))
            .cloned()
            .collect();
        if found.is_empty() {
            return Err(TaskRepositoryError::NoSearchMatches {
                name: search.name().to_owned(),
            });
        }
        Ok(found)
    }

    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id += 1;
        let task_id = TaskId::from_persisted(state.last_id);
        let stored = Task::from_persisted(PersistedTaskData {
            id: task_id,
            name: task.name().to_owned(),
            description: task.description().to_owned(),
            status: task.status(),
            user_id: task.user_id(),
            created_at: task.created_at(),
            updated_at: None,
        });
        state.tasks.insert(task_id, stored);
        find_owned(&state, task_id, task.user_id())
    }

    async fn update(&self, update: &TaskUpdate) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        let existing = state
            .tasks
            .get(&update.id())
            .filter(|task| task.user_id() == update.user_id())
            .cloned();
        if let Some(current) = existing {
            let revised = Task::from_persisted(PersistedTaskData {
                id: current.id(),
                name: update.name().to_owned(),
                description: update.description().to_owned(),
                status: update.status(),
                user_id: current.user_id(),
                created_at: current.created_at(),
                updated_at: Some(update.updated_at()),
            });
            state.tasks.insert(current.id(), revised);
        }
        find_owned(&state, update.id(), update.user_id())
    }

    async fn delete(&self, task_id: TaskId, user_id: UserId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let owned = state
            .tasks
            .get(&task_id)
            .is_some_and(|task| task.user_id() == user_id);
        if owned {
            state.tasks.remove(&task_id);
        }
        Ok(())
    }
}
