//! Task lifecycle management.
//!
//! Tasks move through a fixed state machine (`UNCLAIMED → CLAIMED →
//! IN_PROGRESS → {PAUSED, BLOCKED, DONE}`) whose rules live in a static
//! transition table. Only the assignee may drive a task once it is claimed.
//! The module follows hexagonal architecture:
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
