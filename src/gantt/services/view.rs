//! Service that loads tasks and milestones and assembles timeline views.

use crate::gantt::{
    domain::{GanttView, TaskFilter, TaskStats, TimeScale, TimelineConfig},
    ports::{MilestoneRepository, MilestoneRepositoryError},
};
use crate::task::{
    domain::Task,
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDateTime;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Request for a timeline view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GanttQuery {
    /// Which tasks to show.
    pub filter: TaskFilter,
    /// Zoom level.
    pub scale: TimeScale,
}

impl GanttQuery {
    /// Creates an unfiltered query at `scale`.
    #[must_use]
    pub fn at_scale(scale: TimeScale) -> Self {
        Self {
            filter: TaskFilter::default(),
            scale,
        }
    }
}

/// Service-level errors for timeline views.
#[derive(Debug, Error)]
pub enum GanttError {
    /// Loading tasks failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Loading milestones failed.
    #[error(transparent)]
    Milestones(#[from] MilestoneRepositoryError),
}

/// Result type for timeline service operations.
pub type GanttResult<T> = Result<T, GanttError>;

/// Timeline orchestration service.
///
/// "Now" is the clock's local wall time; overdue checks and the today
/// marker both use it.
#[derive(Clone)]
pub struct GanttService<R, M, C>
where
    R: TaskRepository,
    M: MilestoneRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    milestones: Arc<M>,
    clock: Arc<C>,
    config: TimelineConfig,
}

impl<R, M, C> GanttService<R, M, C>
where
    R: TaskRepository,
    M: MilestoneRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default timeline configuration.
    #[must_use]
    pub fn new(tasks: Arc<R>, milestones: Arc<M>, clock: Arc<C>) -> Self {
        Self::with_config(tasks, milestones, clock, TimelineConfig::default())
    }

    /// Creates a service with an explicit timeline configuration.
    #[must_use]
    pub const fn with_config(
        tasks: Arc<R>,
        milestones: Arc<M>,
        clock: Arc<C>,
        config: TimelineConfig,
    ) -> Self {
        Self {
            tasks,
            milestones,
            clock,
            config,
        }
    }

    /// Returns the timeline configuration.
    #[must_use]
    pub const fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Builds the timeline view for `query`.
    ///
    /// Milestones follow the project filter only.
    ///
    /// # Errors
    ///
    /// Returns [`GanttError`] when either repository fails.
    pub async fn gantt_view(&self, query: GanttQuery) -> GanttResult<GanttView> {
        let now = self.now();
        let tasks = self.filtered_tasks(&query.filter, now).await?;
        let milestones = self.milestones.list(query.filter.project_id).await?;
        let view = GanttView::assemble(&tasks, milestones, query.scale, now, &self.config);
        debug!(
            scale = %query.scale,
            tasks = tasks.len(),
            rows = view.rows.len(),
            "timeline view assembled"
        );
        Ok(view)
    }

    /// Computes statistics over the tasks matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`GanttError::Tasks`] when the task repository fails.
    pub async fn gantt_stats(&self, filter: TaskFilter) -> GanttResult<TaskStats> {
        let now = self.now();
        let tasks = self.filtered_tasks(&filter, now).await?;
        Ok(TaskStats::collect(&tasks, now.date()))
    }

    async fn filtered_tasks(
        &self,
        filter: &TaskFilter,
        now: NaiveDateTime,
    ) -> GanttResult<Vec<Task>> {
        let tasks = self.tasks.list(&filter.repository_query()).await?;
        Ok(filter.apply(tasks, now.date()))
    }

    fn now(&self) -> NaiveDateTime {
        self.clock.local().naive_local()
    }
}
