//! Step definitions for user deletion scenarios.

mod given;
mod then;
mod when;
pub mod world;
