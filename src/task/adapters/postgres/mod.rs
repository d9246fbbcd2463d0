//! `PostgreSQL` adapters for task persistence.

pub(crate) mod models;
mod query;
mod repository;
pub(crate) mod schema;

pub use query::{BoxedTaskQuery, TaskQueryBuilder, paged_tasks_query};
pub use repository::{PostgresTaskRepository, TaskPgPool};

#[cfg(test)]
pub(crate) use query::contains_pattern;
