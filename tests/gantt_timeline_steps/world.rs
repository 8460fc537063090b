//! Shared world state for timeline BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use taskline::{
    gantt::{
        adapters::memory::InMemoryMilestoneRepository,
        domain::GanttView,
        services::{GanttError, GanttService},
    },
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::TaskId,
        services::TaskLifecycleService,
    },
};

/// Clock pinned to a settable local instant.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioClock {
    now: DateTime<Local>,
}

impl Clock for ScenarioClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}

/// Scenario world for timeline behaviour tests.
pub struct TimelineWorld {
    pub tasks: Arc<InMemoryTaskRepository>,
    pub clock: Option<Arc<ScenarioClock>>,
    pub titles: HashMap<String, TaskId>,
    pub last_view: Option<Result<GanttView, GanttError>>,
}

impl TimelineWorld {
    /// Creates a world with empty repositories and no clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(InMemoryTaskRepository::new()),
            clock: None,
            titles: HashMap::new(),
            last_view: None,
        }
    }

    /// Pins "now" to noon local time on `day`.
    ///
    /// # Errors
    ///
    /// Returns an error when noon does not exist locally on `day`.
    pub fn set_today(&mut self, day: NaiveDate) -> Result<(), eyre::Report> {
        let noon = day
            .and_hms_opt(12, 0, 0)
            .ok_or_else(|| eyre::eyre!("invalid day {day}"))?;
        let now = Local
            .from_local_datetime(&noon)
            .earliest()
            .ok_or_else(|| eyre::eyre!("{noon} does not exist locally"))?;
        self.clock = Some(Arc::new(ScenarioClock { now }));
        Ok(())
    }

    fn clock(&self) -> Result<Arc<ScenarioClock>, eyre::Report> {
        self.clock
            .clone()
            .ok_or_else(|| eyre::eyre!("scenario did not set today"))
    }

    /// Returns a lifecycle service over the scenario's tasks.
    ///
    /// # Errors
    ///
    /// Returns an error when today has not been set.
    pub fn lifecycle(
        &self,
    ) -> Result<TaskLifecycleService<InMemoryTaskRepository, ScenarioClock>, eyre::Report> {
        Ok(TaskLifecycleService::new(
            Arc::clone(&self.tasks),
            self.clock()?,
        ))
    }

    /// Returns a timeline service over the scenario's tasks.
    ///
    /// # Errors
    ///
    /// Returns an error when today has not been set.
    pub fn gantt(
        &self,
    ) -> Result<
        GanttService<InMemoryTaskRepository, InMemoryMilestoneRepository, ScenarioClock>,
        eyre::Report,
    > {
        Ok(GanttService::new(
            Arc::clone(&self.tasks),
            Arc::new(InMemoryMilestoneRepository::new()),
            self.clock()?,
        ))
    }

    /// Returns the identifier of the task with `title`.
    ///
    /// # Errors
    ///
    /// Returns an error for titles no step has created.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.titles
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task titled {title:?}"))
    }

    /// Returns the last successfully assembled view.
    ///
    /// # Errors
    ///
    /// Returns an error when no view was requested or the request failed.
    pub fn view(&self) -> Result<&GanttView, eyre::Report> {
        match self.last_view.as_ref() {
            Some(Ok(view)) => Ok(view),
            Some(Err(err)) => Err(eyre::eyre!("timeline request failed: {err}")),
            None => Err(eyre::eyre!("no timeline was viewed")),
        }
    }
}

impl Default for TimelineWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TimelineWorld {
    TimelineWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
