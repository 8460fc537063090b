//! Shared test helpers for in-memory repository integration tests.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::Arc;
use taskline::{
    gantt::{adapters::memory::InMemoryMilestoneRepository, services::GanttService},
    task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService},
};

/// Clock frozen at a local wall time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    /// Freezes the clock at `hour:00` local time on `day`.
    ///
    /// # Errors
    ///
    /// Returns an error when the wall time does not exist locally.
    pub fn at(day: NaiveDate, hour: u32) -> Result<Self, eyre::Report> {
        let naive = day
            .and_hms_opt(hour, 0, 0)
            .ok_or_else(|| eyre::eyre!("invalid hour {hour}"))?;
        let now = Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| eyre::eyre!("{naive} does not exist in the local time zone"))?;
        Ok(Self { now })
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}

/// Builds a calendar date.
///
/// # Errors
///
/// Returns an error for impossible dates.
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| eyre::eyre!("invalid date {year}-{month}-{day}"))
}

/// Services sharing one task repository.
pub struct Harness {
    /// Lifecycle service.
    pub lifecycle: TaskLifecycleService<InMemoryTaskRepository, FixedClock>,
    /// Timeline service over the same tasks.
    pub gantt: GanttService<InMemoryTaskRepository, InMemoryMilestoneRepository, FixedClock>,
    /// Milestone store backing the timeline service.
    pub milestones: Arc<InMemoryMilestoneRepository>,
}

/// Provides services wired to fresh repositories, with "now" at
/// Monday 2026-03-02 10:00 local time.
///
/// # Errors
///
/// Returns an error if the fixed clock cannot be built.
#[fixture]
pub fn harness() -> Result<Harness, eyre::Report> {
    let clock = Arc::new(FixedClock::at(date(2026, 3, 2)?, 10)?);
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let milestones = Arc::new(InMemoryMilestoneRepository::new());
    Ok(Harness {
        lifecycle: TaskLifecycleService::new(Arc::clone(&tasks), Arc::clone(&clock)),
        gantt: GanttService::new(tasks, Arc::clone(&milestones), clock),
        milestones,
    })
}
