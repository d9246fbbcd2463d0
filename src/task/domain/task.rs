//! Task record and the payloads used to create and update it.

use super::{ParseTaskStatusError, TaskDomainError, TaskId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Completion status of a task, persisted as a small integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i16", try_from = "i16")]
pub enum TaskStatus {
    /// Work on the task is outstanding.
    Pending,
    /// The task has been completed.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage code.
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::Pending => 0,
            Self::Done => 1,
        }
    }

    /// Interprets a caller-supplied status filter.
    ///
    /// Only the codes `0` and `1` select a status; any other value, including
    /// `None`, means the caller does not filter by status.
    #[must_use]
    pub const fn filter_from_code(code: Option<i16>) -> Option<Self> {
        match code {
            Some(0) => Some(Self::Pending),
            Some(1) => Some(Self::Done),
            _ => None,
        }
    }
}

impl From<TaskStatus> for i16 {
    fn from(status: TaskStatus) -> Self {
        status.code()
    }
}

impl TryFrom<i16> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Done),
            other => Err(ParseTaskStatusError(other)),
        }
    }
}

/// Task record owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    name: String,
    description: String,
    status: TaskStatus,
    user_id: UserId,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Persisted name.
    pub name: String,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: TaskStatus,
    /// Owning user.
    pub user_id: UserId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the most recent update, if the task was ever updated.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            status: data.status,
            user_id: data.user_id,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp, if any.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Builds a full-field update for this task, stamped with the clock.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the new name is blank.
    pub fn revise(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Result<TaskUpdate, TaskDomainError> {
        TaskUpdate::new(self.id, self.user_id, name, description, status, clock)
    }
}

/// Insert payload for a task that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    name: String,
    description: String,
    status: TaskStatus,
    user_id: UserId,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates an insert payload with `created_at` taken from the clock.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the name is blank.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
        user_id: UserId,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            name: validated_name(name.into())?,
            description: description.into(),
            status,
            user_id,
            created_at: clock.utc(),
        })
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Full-field update for an existing task, scoped to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    id: TaskId,
    user_id: UserId,
    name: String,
    description: String,
    status: TaskStatus,
    updated_at: DateTime<Utc>,
}

impl TaskUpdate {
    /// Creates an update payload with `updated_at` taken from the clock.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the name is blank.
    pub fn new(
        id: TaskId,
        user_id: UserId,
        name: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            id,
            user_id,
            name: validated_name(name.into())?,
            description: description.into(),
            status,
            updated_at: clock.utc(),
        })
    }

    /// Returns the targeted task.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the user the update is scoped to.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the new name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the new description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the new status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

fn validated_name(name: String) -> Result<String, TaskDomainError> {
    if name.trim().is_empty() {
        return Err(TaskDomainError::EmptyTaskName);
    }
    Ok(name)
}
