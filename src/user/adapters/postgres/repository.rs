//! `PostgreSQL` repository for user removal.

use super::schema::users;
use crate::postgres::{PgPool, run_with_connection};
use crate::task::adapters::postgres::schema::tasks;
use crate::user::{
    domain::{UserDeletion, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use tracing::debug;

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        run_with_connection(
            &self.pool,
            f,
            UserRepositoryError::persistence,
            UserRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn delete_user_tasks(&self, user_id: UserId) -> UserRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            delete_tasks_owned_by(connection, user_id).map_err(UserRepositoryError::persistence)
        })
        .await
    }

    async fn delete_user(&self, user_id: UserId) -> UserRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            delete_user_record(connection, user_id).map_err(UserRepositoryError::persistence)
        })
        .await
    }

    async fn delete_user_with_tasks(&self, user_id: UserId) -> UserRepositoryResult<UserDeletion> {
        self.run_blocking(move |connection| {
            connection
                .transaction::<_, DieselError, _>(|tx| {
                    let tasks_removed = delete_tasks_owned_by(tx, user_id)?;
                    let user_removed = delete_user_record(tx, user_id)?;
                    Ok(UserDeletion {
                        user_id,
                        tasks_removed,
                        user_removed,
                    })
                })
                .map_err(UserRepositoryError::persistence)
        })
        .await
    }
}

fn delete_tasks_owned_by(connection: &mut PgConnection, user_id: UserId) -> QueryResult<u64> {
    let removed = diesel::delete(tasks::table.filter(tasks::user_id.eq(user_id.value())))
        .execute(connection)?;
    debug!(%user_id, removed, "deleted tasks owned by user");
    Ok(u64::try_from(removed).unwrap_or(u64::MAX))
}

fn delete_user_record(connection: &mut PgConnection, user_id: UserId) -> QueryResult<bool> {
    let removed =
        diesel::delete(users::table.filter(users::id.eq(user_id.value()))).execute(connection)?;
    debug!(%user_id, removed, "deleted user record");
    Ok(removed > 0)
}
