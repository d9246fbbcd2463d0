//! Diesel row models for task persistence and their domain mapping.

use super::schema::tasks;
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskStatus, TaskUpdate, UserId},
    ports::{TaskRepositoryError, TaskRepositoryResult},
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-generated identifier.
    pub id: i64,
    /// Task name.
    pub name: String,
    /// Task description.
    pub description: String,
    /// Raw status code.
    pub status: i16,
    /// Owning user.
    pub user_id: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task name.
    pub name: String,
    /// Task description.
    pub description: String,
    /// Status code.
    pub status: i16,
    /// Owning user.
    pub user_id: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&NewTask> for NewTaskRow {
    fn from(task: &NewTask) -> Self {
        Self {
            name: task.name().to_owned(),
            description: task.description().to_owned(),
            status: task.status().code(),
            user_id: task.user_id().value(),
            created_at: task.created_at(),
        }
    }
}

/// Changeset applied by full-field task updates.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// New name.
    pub name: String,
    /// New description.
    pub description: String,
    /// New status code.
    pub status: i16,
    /// Update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&TaskUpdate> for TaskChangeset {
    fn from(update: &TaskUpdate) -> Self {
        Self {
            name: update.name().to_owned(),
            description: update.description().to_owned(),
            status: update.status().code(),
            updated_at: update.updated_at(),
        }
    }
}

/// Maps a persisted row onto the domain task.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when the stored status code
/// is not a known [`TaskStatus`].
pub fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        name,
        description,
        status: persisted_status,
        user_id,
        created_at,
        updated_at,
    } = row;

    let status = TaskStatus::try_from(persisted_status).map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_persisted(id),
        name,
        description,
        status,
        user_id: UserId::from_persisted(user_id),
        created_at,
        updated_at,
    }))
}
