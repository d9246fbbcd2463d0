//! User lifecycle management.
//!
//! Deleting a user cascades to their tasks in application code: tasks are
//! removed first, then the user record. The module follows the same
//! hexagonal layout as [`crate::task`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
