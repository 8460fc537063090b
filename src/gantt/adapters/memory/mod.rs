//! In-memory adapters for the timeline context.

mod milestone;

pub use milestone::InMemoryMilestoneRepository;
