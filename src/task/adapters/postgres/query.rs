//! Composable, parameterized task queries.
//!
//! Each predicate is a typed Diesel expression whose values are sent as bind
//! parameters; nothing user-supplied is spliced into SQL text. Every built
//! query is ordered by ascending task id.

use super::schema::tasks;
use crate::task::domain::{TaskId, TaskPageFilter, TaskStatus, UserId};
use diesel::dsl::sql;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Text;

/// Boxed select over the `tasks` table.
pub type BoxedTaskQuery<'a> = tasks::BoxedQuery<'a, Pg>;

/// Builder composing owner-scoped task predicates with `AND`.
pub struct TaskQueryBuilder<'a> {
    query: BoxedTaskQuery<'a>,
}

impl Default for TaskQueryBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TaskQueryBuilder<'a> {
    /// Starts an unfiltered query over all tasks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: tasks::table.into_boxed(),
        }
    }

    /// Restricts results to tasks owned by `user_id`.
    #[must_use]
    pub fn owned_by(self, user_id: UserId) -> Self {
        Self {
            query: self.query.filter(tasks::user_id.eq(user_id.value())),
        }
    }

    /// Restricts results to a single task.
    #[must_use]
    pub fn with_id(self, task_id: TaskId) -> Self {
        Self {
            query: self.query.filter(tasks::id.eq(task_id.value())),
        }
    }

    /// Keeps tasks whose name contains `fragment`.
    #[must_use]
    pub fn name_contains(self, fragment: &str) -> Self {
        Self {
            query: self.query.filter(tasks::name.like(contains_pattern(fragment))),
        }
    }

    /// Keeps tasks whose description contains `fragment`.
    #[must_use]
    pub fn description_contains(self, fragment: &str) -> Self {
        Self {
            query: self
                .query
                .filter(tasks::description.like(contains_pattern(fragment))),
        }
    }

    /// Keeps tasks with exactly this status; `None` leaves the query as is.
    #[must_use]
    pub fn with_status(self, status: Option<TaskStatus>) -> Self {
        match status {
            Some(selected) => Self {
                query: self.query.filter(tasks::status.eq(selected.code())),
            },
            None => self,
        }
    }

    /// Keeps tasks whose status code, rendered as text, contains `fragment`.
    #[must_use]
    pub fn status_text_contains(self, fragment: &str) -> Self {
        Self {
            query: self
                .query
                .filter(sql::<Text>("CAST(status AS TEXT)").like(contains_pattern(fragment))),
        }
    }

    /// Finishes the query with the ascending id ordering.
    #[must_use]
    pub fn build(self) -> BoxedTaskQuery<'a> {
        self.query.order(tasks::id.asc())
    }
}

/// Prepared template for paging collaborators.
///
/// Combines the owner with name, description and status-text substring
/// filters. The repository itself never runs this query.
#[must_use]
pub fn paged_tasks_query(user_id: UserId, filter: &TaskPageFilter) -> BoxedTaskQuery<'static> {
    TaskQueryBuilder::new()
        .owned_by(user_id)
        .name_contains(&filter.name)
        .description_contains(&filter.description)
        .status_text_contains(&filter.status)
        .build()
}

/// Wraps `fragment` for a `LIKE` substring match, escaping wildcards.
pub(crate) fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
