//! Assembled timeline view: ordered rows, markers, layout, and stats.

use super::{
    BarPosition, Milestone, ProgressBucket, TaskStats, TimeScale, TimelineConfig,
    TimelineLayout, TreeConnector, build_tree_connectors, is_overdue, sort_tasks,
};
use crate::task::domain::{ProjectId, Task};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One task row of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttRow {
    /// Task snapshot.
    pub task: Task,
    /// Tree guides, outermost ancestor first.
    pub connectors: Vec<TreeConnector>,
    /// Bar geometry.
    pub bar: BarPosition,
    /// Overdue on the view's reference day.
    pub is_overdue: bool,
    /// Days until due, `None` once done.
    pub days_remaining: Option<i64>,
    /// Planned duration in days, both ends inclusive.
    pub duration_days: i64,
    /// Progress bucket for colouring.
    pub progress_bucket: ProgressBucket,
}

/// A milestone placed on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneMarker {
    /// Milestone.
    pub milestone: Milestone,
    /// Clamped position in percent.
    pub position: f64,
}

/// Rows of one project, in view order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectGroup<'a> {
    /// Project the rows belong to.
    pub project_id: ProjectId,
    /// Rows of the project.
    pub rows: Vec<&'a GanttRow>,
}

/// Complete timeline view for a filtered task set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttView {
    /// Scheduled tasks in dependency order.
    pub rows: Vec<GanttRow>,
    /// Milestone markers in input order.
    pub milestones: Vec<MilestoneMarker>,
    /// Window, axis marks, and today marker.
    pub layout: TimelineLayout,
    /// Statistics over every task passed in, scheduled or not.
    pub stats: TaskStats,
}

impl GanttView {
    /// Builds the view for an already filtered task set.
    ///
    /// Statistics cover all of `tasks`; only tasks with both dates get a
    /// row.
    #[must_use]
    pub fn assemble(
        tasks: &[Task],
        milestones: Vec<Milestone>,
        scale: TimeScale,
        now: NaiveDateTime,
        config: &TimelineConfig,
    ) -> Self {
        let today = now.date();
        let stats = TaskStats::collect(tasks, today);
        let scheduled: Vec<Task> = tasks
            .iter()
            .filter(|task| task.schedule().is_some())
            .cloned()
            .collect();
        let ordered = sort_tasks(&scheduled);
        let mut connectors = build_tree_connectors(&ordered);
        let layout = TimelineLayout::compute(&ordered, &milestones, scale, now, config);

        let rows = ordered
            .into_iter()
            .filter_map(|task| {
                let schedule = task.schedule()?;
                Some(GanttRow {
                    connectors: connectors.remove(&task.id()).unwrap_or_default(),
                    bar: layout.bar(&schedule),
                    is_overdue: is_overdue(task.due_date(), task.status(), today),
                    days_remaining: task.days_remaining(today),
                    duration_days: schedule.duration_days(),
                    progress_bucket: ProgressBucket::of(task.progress()),
                    task,
                })
            })
            .collect();
        let markers = milestones
            .into_iter()
            .map(|milestone| MilestoneMarker {
                position: layout.milestone_position(&milestone),
                milestone,
            })
            .collect();

        Self {
            rows,
            milestones: markers,
            layout,
            stats,
        }
    }

    /// Splits the rows by project, in order of each project's first row.
    ///
    /// Rows keep their relative order inside a group.
    #[must_use]
    pub fn grouped_by_project(&self) -> Vec<ProjectGroup<'_>> {
        let mut groups: Vec<ProjectGroup<'_>> = Vec::new();
        for row in &self.rows {
            let project_id = row.task.project_id();
            if let Some(group) = groups.iter_mut().find(|g| g.project_id == project_id) {
                group.rows.push(row);
                continue;
            }
            groups.push(ProjectGroup {
                project_id,
                rows: vec![row],
            });
        }
        groups
    }
}
