//! Error types for task domain validation, transitions, and parsing.

use super::{EmployeeId, TaskAction, TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned by task domain operations.
///
/// Every variant is a deterministic function of its input: retrying the
/// same request against the same snapshot reproduces the same error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The action is not defined for the task's current status.
    #[error("cannot {action} task {task_id} while it is {from}")]
    IllegalTransition {
        /// Task that rejected the action.
        task_id: TaskId,
        /// Status the task was in when the action was requested.
        from: TaskStatus,
        /// Requested action.
        action: TaskAction,
    },

    /// The acting employee is not allowed to perform the action.
    #[error("employee {actor} may not {action} task {task_id}: not the assignee")]
    PermissionDenied {
        /// Task that rejected the action.
        task_id: TaskId,
        /// Requested action.
        action: TaskAction,
        /// Employee that requested the action.
        actor: EmployeeId,
    },

    /// Only the assignee may report progress.
    #[error("employee {actor} may not report progress on task {task_id}: not the assignee")]
    ProgressReportDenied {
        /// Task the report targeted.
        task_id: TaskId,
        /// Employee that sent the report.
        actor: EmployeeId,
    },

    /// The task is done and accepts no further changes.
    #[error("task {0} is already done")]
    TaskClosed(TaskId),

    /// Task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// Progress value falls outside `0..=100`.
    #[error("invalid progress {0}, expected a value between 0 and 100")]
    InvalidProgress(u8),

    /// A task was asked to depend on itself.
    #[error("task {0} cannot depend on itself")]
    SelfDependency(TaskId),

    /// Adding the dependency would close a cycle.
    #[error("task {task_id} cannot depend on {dependency}: it would create a cycle")]
    CircularDependency {
        /// Task receiving the new prerequisite.
        task_id: TaskId,
        /// Prerequisite that already depends, transitively, on `task_id`.
        dependency: TaskId,
    },
}

/// Error returned while parsing task statuses from storage or wire values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task actions from route segments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task action: {0}")]
pub struct ParseTaskActionError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
