//! Step definitions for timeline view scenarios.

pub mod world;
