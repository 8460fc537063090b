//! Display filters applied before the timeline pipeline runs.

use super::is_overdue;
use crate::task::{
    domain::{EmployeeId, ProjectId, Task, TaskStatus},
    ports::TaskQuery,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filter selecting the tasks a view displays.
///
/// Unset fields match everything. Statistics and the timeline are both
/// computed over the filtered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskFilter {
    /// Restrict to one project.
    pub project_id: Option<ProjectId>,
    /// Restrict to one assignee.
    pub assignee_id: Option<EmployeeId>,
    /// Restrict to one status.
    pub status: Option<TaskStatus>,
    /// Keep only tasks overdue on the reference day.
    pub overdue_only: bool,
}

impl TaskFilter {
    /// Returns the part of the filter a repository can evaluate.
    #[must_use]
    pub const fn repository_query(&self) -> TaskQuery {
        TaskQuery {
            project_id: self.project_id,
            assignee_id: self.assignee_id,
            status: self.status,
        }
    }

    /// Returns `true` when `task` passes every set criterion on `today`.
    #[must_use]
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        self.repository_query().matches(task)
            && (!self.overdue_only || is_overdue(task.due_date(), task.status(), today))
    }

    /// Returns the tasks that pass the filter, in input order.
    #[must_use]
    pub fn apply(&self, tasks: Vec<Task>, today: NaiveDate) -> Vec<Task> {
        tasks
            .into_iter()
            .filter(|task| self.matches(task, today))
            .collect()
    }
}
