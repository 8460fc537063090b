//! Taskline: task lifecycle tracking and dependency-aware timelines.
//!
//! Tasks move through a fixed state machine driven by named actions.
//! Timeline views order tasks by their prerequisites, annotate them with
//! tree guides, summarise progress, and lay them out on a date axis.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture:
//!
//! - **Domain**: Pure logic over task snapshots, no storage or clock reads
//! - **Ports**: Async repository traits
//! - **Adapters**: In-memory implementations of the ports
//! - **Services**: Orchestration with an injected [`mockable::Clock`]
//!
//! # Modules
//!
//! - [`task`]: Task model, lifecycle transitions, and progress reports
//! - [`gantt`]: Ordering, tree connectors, statistics, and timeline layout
//! - [`api`]: Success/error envelope with stable error codes

pub mod api;
pub mod gantt;
pub mod task;

#[cfg(test)]
mod test_support;
