//! Domain model for task lifecycle management.
//!
//! Tasks are snapshots handed in by the data layer. The domain validates
//! and applies lifecycle actions against the static transition table and
//! returns new snapshots; it never stores anything itself.

mod action;
pub mod dependency;
mod error;
mod ids;
mod progress;
mod schedule;
mod status;
mod task;
pub mod transition;

pub use action::TaskAction;
pub use dependency::would_create_cycle;
pub use error::{
    ParseTaskActionError, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError,
};
pub use ids::{EmployeeId, MilestoneId, ProjectId, TaskId};
pub use progress::Progress;
pub use schedule::Schedule;
pub use status::{TaskPriority, TaskStatus};
pub use task::{NewTask, PersistedTaskData, Task};
pub use transition::{
    TRANSITION_TABLE, Transition, TransitionGuard, can_transition, next_status,
};
