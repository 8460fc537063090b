//! Task aggregate and its lifecycle state machine.
//!
//! Every operation takes `&self` and returns a new snapshot. Persisting the
//! result, and serialising concurrent writers, is the caller's job.

use super::{
    EmployeeId, MilestoneId, Progress, ProjectId, Schedule, TaskAction, TaskDomainError, TaskId,
    TaskPriority, TaskStatus, dependency::would_create_cycle, transition,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    milestone_id: Option<MilestoneId>,
    title: String,
    status: TaskStatus,
    priority: TaskPriority,
    assignee_id: Option<EmployeeId>,
    progress: Progress,
    start_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    depends_on: Vec<TaskId>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    revision: u64,
}

/// Parameter object for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Owning project.
    pub project_id: ProjectId,
    /// Human-readable title.
    pub title: String,
    /// Milestone the task rolls up into, if any.
    pub milestone_id: Option<MilestoneId>,
    /// Priority.
    pub priority: TaskPriority,
    /// Initial assignee. An assigned task starts out claimed.
    pub assignee_id: Option<EmployeeId>,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned due date.
    pub due_date: Option<NaiveDate>,
    /// Prerequisite task identifiers.
    pub depends_on: Vec<TaskId>,
}

impl NewTask {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            milestone_id: None,
            priority: TaskPriority::default(),
            assignee_id: None,
            start_date: None,
            due_date: None,
            depends_on: Vec::new(),
        }
    }
}

/// Parameter object for reconstructing a task snapshot from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Milestone, if any.
    pub milestone_id: Option<MilestoneId>,
    /// Title.
    pub title: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Priority.
    pub priority: TaskPriority,
    /// Current assignee.
    pub assignee_id: Option<EmployeeId>,
    /// Completion percentage.
    pub progress: Progress,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned due date.
    pub due_date: Option<NaiveDate>,
    /// Prerequisite task identifiers, in declaration order.
    pub depends_on: Vec<TaskId>,
    /// When work started.
    pub started_at: Option<DateTime<Utc>>,
    /// When the task was completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest change timestamp.
    pub updated_at: DateTime<Utc>,
    /// Number of changes applied since creation.
    pub revision: u64,
}

impl Task {
    /// Creates a new task. Repeated prerequisites are collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn create(data: NewTask, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let title = data.title.trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let timestamp = clock.utc();
        let status = if data.assignee_id.is_some() {
            TaskStatus::Claimed
        } else {
            TaskStatus::Unclaimed
        };
        let mut depends_on = Vec::with_capacity(data.depends_on.len());
        for dependency in data.depends_on {
            if !depends_on.contains(&dependency) {
                depends_on.push(dependency);
            }
        }

        Ok(Self {
            id: TaskId::new(),
            project_id: data.project_id,
            milestone_id: data.milestone_id,
            title: title.to_owned(),
            status,
            priority: data.priority,
            assignee_id: data.assignee_id,
            progress: Progress::ZERO,
            start_date: data.start_date,
            due_date: data.due_date,
            depends_on,
            started_at: None,
            completed_at: None,
            created_at: timestamp,
            updated_at: timestamp,
            revision: 0,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            milestone_id: data.milestone_id,
            title: data.title,
            status: data.status,
            priority: data.priority,
            assignee_id: data.assignee_id,
            progress: data.progress,
            start_date: data.start_date,
            due_date: data.due_date,
            depends_on: data.depends_on,
            started_at: data.started_at,
            completed_at: data.completed_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
            revision: data.revision,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the milestone, if any.
    #[must_use]
    pub const fn milestone_id(&self) -> Option<MilestoneId> {
        self.milestone_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the current assignee.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<EmployeeId> {
        self.assignee_id
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the planned start date.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the planned due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns both planned dates when the task has them.
    #[must_use]
    pub fn schedule(&self) -> Option<Schedule> {
        Schedule::from_parts(self.start_date, self.due_date)
    }

    /// Returns the prerequisite identifiers in declaration order.
    #[must_use]
    pub fn depends_on(&self) -> &[TaskId] {
        &self.depends_on
    }

    /// Returns when work started.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Returns when the task was completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest change timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the change counter. Every applied change produces a
    /// snapshot one revision ahead of the one it was derived from.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn touched(mut self, at: DateTime<Utc>, base: u64) -> Self {
        self.updated_at = at;
        self.revision = base.saturating_add(1);
        self
    }

    /// Days until the due date, negative once it has passed.
    ///
    /// Returns `None` for done tasks and tasks without a due date.
    #[must_use]
    pub fn days_remaining(&self, today: NaiveDate) -> Option<i64> {
        if self.status.is_terminal() {
            return None;
        }
        self.due_date.map(|due| (due - today).num_days())
    }

    /// Applies a lifecycle action on behalf of `actor`.
    ///
    /// The guard runs first, so a wrong actor always yields
    /// [`TaskDomainError::PermissionDenied`] even when the action would
    /// also be illegal from the current status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PermissionDenied`] when `actor` fails the
    /// rule's guard and [`TaskDomainError::IllegalTransition`] when the
    /// action is not defined for the current status.
    pub fn apply_transition(
        &self,
        action: TaskAction,
        actor: EmployeeId,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let illegal = || TaskDomainError::IllegalTransition {
            task_id: self.id,
            from: self.status,
            action,
        };
        let rule = transition::rule_for(action).ok_or_else(illegal)?;
        if !rule.guard.permits(self.assignee_id, actor) {
            return Err(TaskDomainError::PermissionDenied {
                task_id: self.id,
                action,
                actor,
            });
        }
        let to = rule
            .accepts(self.status)
            .then_some(rule.to)
            .ok_or_else(illegal)?;

        let now = clock.utc();
        let mut next = self.clone();
        next.status = to;
        match action {
            TaskAction::Claim => next.assignee_id = Some(actor),
            TaskAction::Unclaim => next.assignee_id = None,
            TaskAction::Start => next.started_at = Some(now),
            TaskAction::Complete => {
                next.progress = Progress::COMPLETE;
                next.completed_at = Some(now);
            }
            TaskAction::Pause | TaskAction::Resume | TaskAction::Block | TaskAction::Unblock => {}
        }
        Ok(next.touched(now, self.revision))
    }

    /// Records a progress report from the assignee.
    ///
    /// Status follows progress through the transition table: a first
    /// non-zero report on a claimed task starts it, and reaching 100% on
    /// an in-progress task completes it. Reports that imply a transition
    /// the table forbids (for example 100% while paused) update progress
    /// only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskClosed`] for done tasks and
    /// [`TaskDomainError::ProgressReportDenied`] when `actor` is not the
    /// assignee.
    pub fn report_progress(
        &self,
        progress: Progress,
        actor: EmployeeId,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        if self.status.is_terminal() {
            return Err(TaskDomainError::TaskClosed(self.id));
        }
        if self.assignee_id != Some(actor) {
            return Err(TaskDomainError::ProgressReportDenied {
                task_id: self.id,
                actor,
            });
        }

        let mut next = if progress.value() > 0 && self.status == TaskStatus::Claimed {
            self.apply_transition(TaskAction::Start, actor, clock)?
        } else {
            self.clone()
        };
        if progress.is_complete() && transition::can_transition(next.status, TaskAction::Complete)
        {
            next = next.apply_transition(TaskAction::Complete, actor, clock)?;
        }
        next.progress = progress;
        Ok(next.touched(clock.utc(), self.revision))
    }

    /// Adds a prerequisite, rejecting self-references and cycles.
    ///
    /// `tasks` is the set the cycle check walks; prerequisites outside it
    /// cannot be followed and are treated as leaves. Adding a prerequisite
    /// that is already declared returns an unchanged snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::SelfDependency`] or
    /// [`TaskDomainError::CircularDependency`].
    pub fn with_dependency(
        &self,
        dependency: TaskId,
        tasks: &[Self],
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        if dependency == self.id {
            return Err(TaskDomainError::SelfDependency(self.id));
        }
        if self.depends_on.contains(&dependency) {
            return Ok(self.clone());
        }
        if would_create_cycle(self.id, dependency, tasks) {
            return Err(TaskDomainError::CircularDependency {
                task_id: self.id,
                dependency,
            });
        }
        let mut next = self.clone();
        next.depends_on.push(dependency);
        Ok(next.touched(clock.utc(), self.revision))
    }
}
