//! Adapters for timeline ports.

pub mod memory;
