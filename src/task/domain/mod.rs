//! Domain model for owner-scoped task records.
//!
//! Tasks always belong to exactly one user. The types here carry no
//! infrastructure concerns; persistence is reached through the ports.

mod error;
mod ids;
mod search;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, UserId};
pub use search::{TaskPageFilter, TaskSearch};
pub use task::{NewTask, PersistedTaskData, Task, TaskStatus, TaskUpdate};
