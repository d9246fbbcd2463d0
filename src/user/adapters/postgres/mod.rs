//! `PostgreSQL` adapters for user persistence.

mod repository;
mod schema;

pub use repository::PostgresUserRepository;
