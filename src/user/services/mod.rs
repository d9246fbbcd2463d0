//! Application services for user lifecycle orchestration.

mod deletion;

pub use deletion::{UserDeletionError, UserDeletionResult, UserDeletionService};
