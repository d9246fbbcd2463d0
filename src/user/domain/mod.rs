//! Domain types for user lifecycle operations.

pub use crate::task::domain::UserId;

/// Outcome of deleting a user together with their tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserDeletion {
    /// The deleted user.
    pub user_id: UserId,
    /// Number of owned tasks removed before the user record.
    pub tasks_removed: u64,
    /// Whether a user record existed and was removed.
    pub user_removed: bool,
}
