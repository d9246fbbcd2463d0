//! Port contracts for user lifecycle management.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
