//! Repository port for task persistence and lookup.

use crate::task::domain::{EmployeeId, ProjectId, Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Criteria for listing tasks. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    /// Restrict to one project.
    pub project_id: Option<ProjectId>,
    /// Restrict to one assignee.
    pub assignee_id: Option<EmployeeId>,
    /// Restrict to one status.
    pub status: Option<TaskStatus>,
}

impl TaskQuery {
    /// Returns `true` when `task` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.project_id.is_none_or(|id| task.project_id() == id)
            && self
                .assignee_id
                .is_none_or(|id| task.assignee_id() == Some(id))
            && self.status.is_none_or(|status| task.status() == status)
    }
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Replaces an existing task snapshot.
    ///
    /// The write only succeeds when the stored snapshot is still at
    /// `expected_revision`, so two writers working from the same stale
    /// copy cannot both succeed, however close together they write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist
    /// and [`TaskRepositoryError::Conflict`] when it changed underneath the
    /// caller.
    async fn update(
        &self,
        task: &Task,
        expected_revision: u64,
    ) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task matching `query`, in storage order.
    async fn list(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The stored snapshot changed since the caller read it.
    #[error("task {0} was modified concurrently")]
    Conflict(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
