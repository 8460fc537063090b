//! In-memory integration tests for task lifecycle operations.

use super::helpers::{Harness, date, harness};
use rstest::rstest;
use taskline::{
    api::{ApiResponse, ErrorCode},
    task::{
        domain::{EmployeeId, NewTask, ProjectId, Task, TaskAction, TaskId, TaskStatus},
        services::{ReportProgressRequest, TransitionTaskRequest},
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn claim_report_and_finish_through_progress(
    harness: Result<Harness, eyre::Report>,
) -> eyre::Result<()> {
    let harness = harness?;
    let alice = EmployeeId::new();
    let task = harness
        .lifecycle
        .create_task(NewTask {
            start_date: Some(date(2026, 3, 1)?),
            due_date: Some(date(2026, 3, 6)?),
            ..NewTask::new(ProjectId::new(), "Prepare demo")
        })
        .await?;

    harness
        .lifecycle
        .transition_task(TransitionTaskRequest::for_action(
            task.id(),
            TaskAction::Claim,
            alice,
        ))
        .await?;
    let started = harness
        .lifecycle
        .report_progress(ReportProgressRequest::new(task.id(), alice, 45))
        .await?;
    let finished = harness
        .lifecycle
        .report_progress(ReportProgressRequest::new(task.id(), alice, 100))
        .await?;

    eyre::ensure!(started.status() == TaskStatus::InProgress);
    eyre::ensure!(started.started_at().is_some());
    eyre::ensure!(finished.status() == TaskStatus::Done);
    eyre::ensure!(finished.completed_at().is_some());
    let stored = harness.lifecycle.find_by_id(task.id()).await?;
    eyre::ensure!(stored.as_ref() == Some(&finished));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_actions_map_to_distinct_envelope_codes(
    harness: Result<Harness, eyre::Report>,
) -> eyre::Result<()> {
    let harness = harness?;
    let alice = EmployeeId::new();
    let bob = EmployeeId::new();
    let task = harness
        .lifecycle
        .create_task(NewTask {
            assignee_id: Some(alice),
            ..NewTask::new(ProjectId::new(), "Audit logs")
        })
        .await?;

    let denied: ApiResponse<Task> = harness
        .lifecycle
        .transition_task(TransitionTaskRequest::new(task.id(), "start", bob))
        .await
        .into();
    let illegal: ApiResponse<Task> = harness
        .lifecycle
        .transition_task(TransitionTaskRequest::new(task.id(), "pause", alice))
        .await
        .into();
    let missing: ApiResponse<Task> = harness
        .lifecycle
        .transition_task(TransitionTaskRequest::new(TaskId::new(), "claim", alice))
        .await
        .into();

    let code = |response: &ApiResponse<Task>| response.error.as_ref().map(|error| error.code);
    eyre::ensure!(code(&denied) == Some(ErrorCode::PermDenied));
    eyre::ensure!(denied.http_status() == 403);
    eyre::ensure!(code(&illegal) == Some(ErrorCode::InvalidTransition));
    eyre::ensure!(code(&missing) == Some(ErrorCode::TaskNotFound));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn successful_action_serializes_success_envelope(
    harness: Result<Harness, eyre::Report>,
) -> eyre::Result<()> {
    let harness = harness?;
    let task = harness
        .lifecycle
        .create_task(NewTask::new(ProjectId::new(), "Label issues"))
        .await?;

    let response: ApiResponse<Task> = harness
        .lifecycle
        .transition_task(TransitionTaskRequest::new(
            task.id(),
            "claim",
            EmployeeId::new(),
        ))
        .await
        .into();
    let value = serde_json::to_value(&response)?;

    eyre::ensure!(value["success"] == serde_json::json!(true));
    eyre::ensure!(value["data"]["status"] == serde_json::json!("CLAIMED"));
    eyre::ensure!(value.get("error").is_none());
    Ok(())
}
