//! In-memory integration tests for timeline views.

use super::helpers::{Harness, date, harness};
use rstest::rstest;
use taskline::{
    gantt::{
        domain::{Milestone, TaskFilter, TimeScale, TreeConnector},
        ports::MilestoneRepository,
        services::GanttQuery,
    },
    task::domain::{MilestoneId, NewTask, ProjectId, Task},
};

async fn create_dated(
    harness: &Harness,
    project_id: ProjectId,
    title: &str,
    start: (u32, u32),
    due: (u32, u32),
) -> eyre::Result<Task> {
    let task = harness
        .lifecycle
        .create_task(NewTask {
            start_date: Some(date(2026, start.0, start.1)?),
            due_date: Some(date(2026, due.0, due.1)?),
            ..NewTask::new(project_id, title)
        })
        .await?;
    Ok(task)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dependent_task_is_drawn_under_its_prerequisite(
    harness: Result<Harness, eyre::Report>,
) -> eyre::Result<()> {
    let harness = harness?;
    let project = ProjectId::new();
    let follow_up = create_dated(&harness, project, "Ship", (3, 7), (3, 12)).await?;
    let groundwork = create_dated(&harness, project, "Design", (3, 1), (3, 6)).await?;
    harness
        .lifecycle
        .add_dependency(follow_up.id(), groundwork.id())
        .await?;
    harness
        .lifecycle
        .create_task(NewTask::new(project, "Someday"))
        .await?;

    let view = harness
        .gantt
        .gantt_view(GanttQuery::at_scale(TimeScale::Week))
        .await?;

    let order: Vec<_> = view.rows.iter().map(|row| row.task.id()).collect();
    eyre::ensure!(order == vec![groundwork.id(), follow_up.id()]);
    eyre::ensure!(view.rows[0].connectors.is_empty());
    eyre::ensure!(view.rows[1].connectors == vec![TreeConnector::Last]);
    eyre::ensure!(view.stats.total == 3);
    eyre::ensure!(view.layout.window().start() < view.layout.window().end());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn milestones_follow_the_project_filter(
    harness: Result<Harness, eyre::Report>,
) -> eyre::Result<()> {
    let harness = harness?;
    let shown = ProjectId::new();
    let hidden = ProjectId::new();
    create_dated(&harness, shown, "Visible", (3, 2), (3, 5)).await?;
    create_dated(&harness, hidden, "Elsewhere", (3, 2), (3, 5)).await?;
    let release = Milestone::new(MilestoneId::new(), shown, "Release", date(2026, 3, 9)?);
    harness.milestones.store(&release).await?;
    harness
        .milestones
        .store(&Milestone::new(
            MilestoneId::new(),
            hidden,
            "Other release",
            date(2026, 3, 9)?,
        ))
        .await?;

    let view = harness
        .gantt
        .gantt_view(GanttQuery {
            filter: TaskFilter {
                project_id: Some(shown),
                ..TaskFilter::default()
            },
            scale: TimeScale::Week,
        })
        .await?;

    eyre::ensure!(view.rows.len() == 1);
    eyre::ensure!(view.milestones.len() == 1);
    let marker = &view.milestones[0];
    eyre::ensure!(marker.milestone == release);
    eyre::ensure!((0.0..=100.0).contains(&marker.position));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stats_count_overdue_work_on_the_clock_day(
    harness: Result<Harness, eyre::Report>,
) -> eyre::Result<()> {
    let harness = harness?;
    let project = ProjectId::new();
    create_dated(&harness, project, "Late", (2, 20), (2, 27)).await?;
    create_dated(&harness, project, "Due today", (2, 25), (3, 2)).await?;
    harness
        .lifecycle
        .create_task(NewTask::new(project, "Unscheduled"))
        .await?;

    let stats = harness.gantt.gantt_stats(TaskFilter::default()).await?;
    let overdue = harness
        .gantt
        .gantt_stats(TaskFilter {
            overdue_only: true,
            ..TaskFilter::default()
        })
        .await?;

    eyre::ensure!(stats.total == 3);
    eyre::ensure!(stats.overdue == 1);
    eyre::ensure!(overdue.total == 1);
    Ok(())
}
