//! Step definitions for task state transition scenarios.

pub mod then;
pub mod when;
pub mod world;
