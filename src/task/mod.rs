//! Owner-scoped task persistence.
//!
//! Every read, update and delete of a single task is filtered by both the
//! task identifier and the owning user, so a user can only reach their own
//! tasks. Lookups that miss, and name searches that match nothing, surface
//! as not-found errors. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
