//! Service layer for task creation, lifecycle actions, and progress reports.

use crate::task::{
    domain::{
        EmployeeId, NewTask, ParseTaskActionError, Progress, Task, TaskAction, TaskDomainError,
        TaskId,
    },
    ports::{TaskQuery, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Request payload for applying a lifecycle action to a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTaskRequest {
    task_id: TaskId,
    action: String,
    actor: EmployeeId,
}

impl TransitionTaskRequest {
    /// Creates a request from the route's action segment.
    #[must_use]
    pub fn new(task_id: TaskId, action: impl Into<String>, actor: EmployeeId) -> Self {
        Self {
            task_id,
            action: action.into(),
            actor,
        }
    }

    /// Creates a request from an already-parsed action.
    #[must_use]
    pub fn for_action(task_id: TaskId, action: TaskAction, actor: EmployeeId) -> Self {
        Self::new(task_id, action.as_str(), actor)
    }
}

/// Request payload for a progress report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportProgressRequest {
    task_id: TaskId,
    actor: EmployeeId,
    progress: u8,
}

impl ReportProgressRequest {
    /// Creates a progress report request.
    #[must_use]
    pub const fn new(task_id: TaskId, actor: EmployeeId, progress: u8) -> Self {
        Self {
            task_id,
            actor,
            progress,
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation or a lifecycle rule failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The requested action name is unknown.
    #[error(transparent)]
    InvalidAction(#[from] ParseTaskActionError),
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Loads a snapshot, runs the domain operation, and writes the result back
/// with an optimistic check against the snapshot it read.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when validation fails or the
    /// repository rejects persistence.
    pub async fn create_task(&self, request: NewTask) -> TaskLifecycleResult<Task> {
        let task = Task::create(request, &*self.clock)?;
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn find_by_id(&self, task_id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(task_id).await?)
    }

    /// Applies a lifecycle action and persists the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidAction`] for unknown action
    /// names, [`TaskLifecycleError::NotFound`] for unknown tasks,
    /// [`TaskLifecycleError::Domain`] when the guard or the transition
    /// table rejects the action, and [`TaskLifecycleError::Repository`]
    /// when the write fails.
    pub async fn transition_task(
        &self,
        request: TransitionTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let action = TaskAction::try_from(request.action.as_str())?;
        let current = self.load(request.task_id).await?;

        let next = current
            .apply_transition(action, request.actor, &*self.clock)
            .inspect_err(|err| {
                warn!(task_id = %request.task_id, %action, error = %err, "transition rejected");
            })?;
        self.repository.update(&next, current.revision()).await?;
        info!(
            task_id = %next.id(),
            %action,
            from = %current.status(),
            to = %next.status(),
            "transition applied"
        );
        Ok(next)
    }

    /// Records a progress report from the assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for out-of-range values,
    /// closed tasks, or a non-assignee reporter, plus the lookup and
    /// persistence errors of [`Self::transition_task`].
    pub async fn report_progress(
        &self,
        request: ReportProgressRequest,
    ) -> TaskLifecycleResult<Task> {
        let progress = Progress::new(request.progress)?;
        let current = self.load(request.task_id).await?;
        let next = current.report_progress(progress, request.actor, &*self.clock)?;
        self.repository.update(&next, current.revision()).await?;
        info!(
            task_id = %next.id(),
            %progress,
            status = %next.status(),
            "progress reported"
        );
        Ok(next)
    }

    /// Adds a prerequisite to a task after checking for cycles against every
    /// stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for self-references and
    /// cycles, plus lookup and persistence errors.
    pub async fn add_dependency(
        &self,
        task_id: TaskId,
        dependency: TaskId,
    ) -> TaskLifecycleResult<Task> {
        let current = self.load(task_id).await?;
        let all = self.repository.list(&TaskQuery::default()).await?;
        let next = current.with_dependency(dependency, &all, &*self.clock)?;
        if next != current {
            self.repository.update(&next, current.revision()).await?;
        }
        Ok(next)
    }

    async fn load(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }
}
