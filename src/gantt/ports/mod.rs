//! Ports for the timeline context.

mod milestone;

pub use milestone::{MilestoneRepository, MilestoneRepositoryError, MilestoneRepositoryResult};
