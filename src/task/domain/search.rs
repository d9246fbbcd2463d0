//! Search criteria for owner-scoped task lookups.

use super::{TaskStatus, UserId};

/// Name search over the tasks of a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSearch {
    name: String,
    user_id: UserId,
    status: Option<TaskStatus>,
}

impl TaskSearch {
    /// Creates a search for tasks of `user_id` whose name contains `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, user_id: UserId) -> Self {
        Self {
            name: name.into(),
            user_id,
            status: None,
        }
    }

    /// Narrows the search by a raw status code.
    ///
    /// Codes other than `0` and `1` leave the search unfiltered by status.
    #[must_use]
    pub fn with_status_code(mut self, code: Option<i16>) -> Self {
        self.status = TaskStatus::filter_from_code(code);
        self
    }

    /// Narrows the search to an exact status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the name substring.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the status filter, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns `true` when `candidate` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, candidate: &super::Task) -> bool {
        candidate.user_id() == self.user_id
            && candidate.name().contains(self.name.as_str())
            && self.status.is_none_or(|status| candidate.status() == status)
    }
}

/// Substring filters used by the paged task query.
///
/// Empty filters match every row, mirroring `LIKE '%%'`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPageFilter {
    /// Substring expected in the task name.
    pub name: String,
    /// Substring expected in the task description.
    pub description: String,
    /// Substring expected in the textual status code.
    pub status: String,
}
