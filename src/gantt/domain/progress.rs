//! Progress buckets, overdue detection, and summary statistics.
//!
//! Everything here is a plain reduction over the task slice the caller
//! passes in. Callers hand over the filtered set they are displaying, never
//! a global one.

use crate::task::domain::{Progress, Task, TaskPriority, TaskStatus};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Named progress range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProgressBucket {
    /// 0%.
    NotStarted,
    /// 1–25%.
    Early,
    /// 26–50%.
    Midway,
    /// 51–75%.
    Advanced,
    /// 76–99%.
    NearComplete,
    /// 100%.
    Complete,
}

impl ProgressBucket {
    /// Returns the bucket `progress` falls into.
    #[must_use]
    pub const fn of(progress: Progress) -> Self {
        match progress.value() {
            0 => Self::NotStarted,
            1..=25 => Self::Early,
            26..=50 => Self::Midway,
            51..=75 => Self::Advanced,
            76..=99 => Self::NearComplete,
            _ => Self::Complete,
        }
    }

    /// Returns the renderer-facing name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "notStarted",
            Self::Early => "early",
            Self::Midway => "midway",
            Self::Advanced => "advanced",
            Self::NearComplete => "nearComplete",
            Self::Complete => "complete",
        }
    }
}

/// Returns `true` when a task with this due date and status is overdue on
/// `today`.
///
/// Only calendar days are compared: a task due today is not overdue. Done
/// tasks and tasks without a due date never are.
#[must_use]
pub fn is_overdue(due_date: Option<NaiveDate>, status: TaskStatus, today: NaiveDate) -> bool {
    if status == TaskStatus::Done {
        return false;
    }
    due_date.is_some_and(|due| due < today)
}

/// [`is_overdue`] evaluated against the clock's local calendar day.
#[must_use]
pub fn is_overdue_now(due_date: Option<NaiveDate>, status: TaskStatus, clock: &impl Clock) -> bool {
    is_overdue(due_date, status, clock.local().date_naive())
}

/// Task counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Unclaimed tasks.
    pub unclaimed: usize,
    /// Claimed tasks.
    pub claimed: usize,
    /// In-progress tasks.
    pub in_progress: usize,
    /// Paused tasks.
    pub paused: usize,
    /// Blocked tasks.
    pub blocked: usize,
    /// Done tasks.
    pub done: usize,
}

impl StatusCounts {
    fn record(&mut self, status: TaskStatus) {
        let slot = match status {
            TaskStatus::Unclaimed => &mut self.unclaimed,
            TaskStatus::Claimed => &mut self.claimed,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Paused => &mut self.paused,
            TaskStatus::Blocked => &mut self.blocked,
            TaskStatus::Done => &mut self.done,
        };
        *slot += 1;
    }

    /// Returns the count for `status`.
    #[must_use]
    pub const fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Unclaimed => self.unclaimed,
            TaskStatus::Claimed => self.claimed,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Paused => self.paused,
            TaskStatus::Blocked => self.blocked,
            TaskStatus::Done => self.done,
        }
    }
}

/// Task counts per priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCounts {
    /// Low priority.
    pub low: usize,
    /// Medium priority.
    pub medium: usize,
    /// High priority.
    pub high: usize,
    /// Urgent priority.
    pub urgent: usize,
}

impl PriorityCounts {
    fn record(&mut self, priority: TaskPriority) {
        let slot = match priority {
            TaskPriority::Low => &mut self.low,
            TaskPriority::Medium => &mut self.medium,
            TaskPriority::High => &mut self.high,
            TaskPriority::Urgent => &mut self.urgent,
        };
        *slot += 1;
    }
}

/// Histogram of tasks per progress bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressDistribution {
    /// 0%.
    pub not_started: usize,
    /// 1–25%.
    pub early: usize,
    /// 26–50%.
    pub midway: usize,
    /// 51–75%.
    pub advanced: usize,
    /// 76–99%.
    pub near_complete: usize,
    /// 100%.
    pub complete: usize,
}

impl ProgressDistribution {
    fn record(&mut self, bucket: ProgressBucket) {
        let slot = match bucket {
            ProgressBucket::NotStarted => &mut self.not_started,
            ProgressBucket::Early => &mut self.early,
            ProgressBucket::Midway => &mut self.midway,
            ProgressBucket::Advanced => &mut self.advanced,
            ProgressBucket::NearComplete => &mut self.near_complete,
            ProgressBucket::Complete => &mut self.complete,
        };
        *slot += 1;
    }

    /// Returns the count for `bucket`.
    #[must_use]
    pub const fn get(&self, bucket: ProgressBucket) -> usize {
        match bucket {
            ProgressBucket::NotStarted => self.not_started,
            ProgressBucket::Early => self.early,
            ProgressBucket::Midway => self.midway,
            ProgressBucket::Advanced => self.advanced,
            ProgressBucket::NearComplete => self.near_complete,
            ProgressBucket::Complete => self.complete,
        }
    }
}

/// Summary statistics over a task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Counts per status.
    pub by_status: StatusCounts,
    /// Counts per priority.
    pub by_priority: PriorityCounts,
    /// Counts per progress bucket.
    pub progress_distribution: ProgressDistribution,
    /// Tasks overdue on the reference day.
    pub overdue: usize,
}

impl TaskStats {
    /// Reduces `tasks` into statistics, judging overdue against `today`.
    #[must_use]
    pub fn collect<'a>(tasks: impl IntoIterator<Item = &'a Task>, today: NaiveDate) -> Self {
        tasks.into_iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            stats.by_status.record(task.status());
            stats.by_priority.record(task.priority());
            stats
                .progress_distribution
                .record(ProgressBucket::of(task.progress()));
            if is_overdue(task.due_date(), task.status(), today) {
                stats.overdue += 1;
            }
            stats
        })
    }
}
