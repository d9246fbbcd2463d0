//! `PostgreSQL` repository implementation for owner-scoped task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow, row_to_task},
    query::TaskQueryBuilder,
    schema::tasks,
};
use crate::postgres::{PgPool, run_with_connection};
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskSearch, TaskUpdate, UserId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use tracing::{debug, warn};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = PgPool;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        run_with_connection(
            &self.pool,
            f,
            TaskRepositoryError::persistence,
            TaskRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn get_for_user(&self, task_id: TaskId, user_id: UserId) -> TaskRepositoryResult<Task> {
        debug!(%task_id, %user_id, "fetching task");
        self.run_blocking(move |connection| find_owned_task(connection, task_id, user_id))
            .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        debug!("listing all tasks");
        self.run_blocking(|connection| load_tasks(connection, TaskQueryBuilder::new()))
            .await
    }

    async fn list_by_user(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        debug!(%user_id, "listing tasks for user");
        self.run_blocking(move |connection| {
            load_tasks(connection, TaskQueryBuilder::new().owned_by(user_id))
        })
        .await
    }

    async fn search(&self, search: &TaskSearch) -> TaskRepositoryResult<Vec<Task>> {
        let criteria = search.clone();
        debug!(
            user_id = %criteria.user_id(),
            name = criteria.name(),
            status = ?criteria.status(),
            "searching tasks"
        );
        self.run_blocking(move |connection| {
            let builder = TaskQueryBuilder::new()
                .owned_by(criteria.user_id())
                .name_contains(criteria.name())
                .with_status(criteria.status());
            let found = load_tasks(connection, builder)?;
            if found.is_empty() {
                return Err(TaskRepositoryError::NoSearchMatches {
                    name: criteria.name().to_owned(),
                });
            }
            Ok(found)
        })
        .await
    }

    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let user_id = task.user_id();
        let new_row = NewTaskRow::from(task);
        debug!(%user_id, name = task.name(), "creating task");

        self.run_blocking(move |connection| {
            let inserted_id = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(tasks::id)
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            find_owned_task(connection, TaskId::from_persisted(inserted_id), user_id)
        })
        .await
    }

    async fn update(&self, update: &TaskUpdate) -> TaskRepositoryResult<Task> {
        let task_id = update.id();
        let user_id = update.user_id();
        let changes = TaskChangeset::from(update);
        debug!(%task_id, %user_id, "updating task");

        self.run_blocking(move |connection| {
            let affected = diesel::update(
                tasks::table
                    .filter(tasks::id.eq(task_id.value()))
                    .filter(tasks::user_id.eq(user_id.value())),
            )
            .set(&changes)
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                warn!(%task_id, %user_id, "update matched no owned task");
            }
            find_owned_task(connection, task_id, user_id)
        })
        .await
    }

    async fn delete(&self, task_id: TaskId, user_id: UserId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(
                tasks::table
                    .filter(tasks::id.eq(task_id.value()))
                    .filter(tasks::user_id.eq(user_id.value())),
            )
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            debug!(%task_id, %user_id, affected, "deleted task");
            Ok(())
        })
        .await
    }
}

fn find_owned_task(
    connection: &mut PgConnection,
    task_id: TaskId,
    user_id: UserId,
) -> TaskRepositoryResult<Task> {
    let row = TaskQueryBuilder::new()
        .with_id(task_id)
        .owned_by(user_id)
        .build()
        .select(TaskRow::as_select())
        .first::<TaskRow>(connection)
        .optional()
        .map_err(TaskRepositoryError::persistence)?;

    row.map(row_to_task)
        .transpose()?
        .ok_or(TaskRepositoryError::NotFound { task_id, user_id })
}

fn load_tasks(
    connection: &mut PgConnection,
    builder: TaskQueryBuilder<'_>,
) -> TaskRepositoryResult<Vec<Task>> {
    builder
        .build()
        .select(TaskRow::as_select())
        .load::<TaskRow>(connection)
        .map_err(TaskRepositoryError::persistence)?
        .into_iter()
        .map(row_to_task)
        .collect()
}
