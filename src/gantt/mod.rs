//! Timeline (Gantt) views over task snapshots.
//!
//! The domain layer holds the pure pipeline: dependency ordering, tree
//! connectors, statistics, and layout. The service loads data through the
//! task and milestone ports and feeds it through that pipeline.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
