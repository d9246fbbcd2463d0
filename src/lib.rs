//! Taskdesk: data access for a task-tracking application.
//!
//! This crate persists tasks that are always scoped to the user owning them
//! and removes users together with their tasks.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Task and user types with no infrastructure dependencies
//! - **Ports**: Abstract repository traits
//! - **Adapters**: In-memory and `PostgreSQL` (Diesel) implementations
//!
//! # Modules
//!
//! - [`task`]: Owner-scoped task CRUD and search
//! - [`user`]: Cascading user deletion
//! - [`config`]: Database configuration from the environment
//! - [`postgres`]: Shared connection-pool plumbing

pub mod config;
pub mod postgres;
pub mod task;
pub mod user;
