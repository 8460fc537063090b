//! Fixtures shared by unit tests.

use crate::task::domain::{
    PersistedTaskData, Progress, ProjectId, Task, TaskId, TaskPriority, TaskStatus,
};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use uuid::Uuid;

/// Clock frozen at a local wall time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    /// Freezes the clock at `hour:00` local time on `day`.
    pub fn at(day: NaiveDate, hour: u32) -> Self {
        let naive = day.and_hms_opt(hour, 0, 0).expect("valid wall time");
        let now = Local
            .from_local_datetime(&naive)
            .earliest()
            .expect("local time exists");
        Self { now }
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

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub const fn task_id(n: u128) -> TaskId {
    TaskId::from_uuid(Uuid::from_u128(n))
}

pub const fn project_id(n: u128) -> ProjectId {
    ProjectId::from_uuid(Uuid::from_u128(n))
}

/// Unclaimed, undated task `n` in project 1.
pub fn persisted(n: u128) -> PersistedTaskData {
    let created = Utc
        .with_ymd_and_hms(2026, 1, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp");
    PersistedTaskData {
        id: task_id(n),
        project_id: project_id(1),
        milestone_id: None,
        title: format!("task {n}"),
        status: TaskStatus::Unclaimed,
        priority: TaskPriority::Medium,
        assignee_id: None,
        progress: Progress::ZERO,
        start_date: None,
        due_date: None,
        depends_on: Vec::new(),
        started_at: None,
        completed_at: None,
        created_at: created,
        updated_at: created,
        revision: 0,
    }
}

/// Task `n` scheduled over `[start, due]` with prerequisites `depends_on`.
pub fn scheduled(n: u128, start: NaiveDate, due: NaiveDate, depends_on: &[u128]) -> Task {
    Task::from_persisted(PersistedTaskData {
        start_date: Some(start),
        due_date: Some(due),
        depends_on: depends_on.iter().copied().map(task_id).collect(),
        ..persisted(n)
    })
}

/// Dateless task `n` with prerequisites `depends_on`.
pub fn undated(n: u128, depends_on: &[u128]) -> Task {
    Task::from_persisted(PersistedTaskData {
        depends_on: depends_on.iter().copied().map(task_id).collect(),
        ..persisted(n)
    })
}

/// Task `n` with the given start date only.
pub fn starting(n: u128, start: Option<NaiveDate>, depends_on: &[u128]) -> Task {
    Task::from_persisted(PersistedTaskData {
        start_date: start,
        depends_on: depends_on.iter().copied().map(task_id).collect(),
        ..persisted(n)
    })
}

pub fn ids(tasks: &[Task]) -> Vec<TaskId> {
    tasks.iter().map(Task::id).collect()
}
