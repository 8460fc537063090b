//! Then steps for task state transition BDD scenarios.

use super::world::{TaskTransitionWorld, run_async};
use rstest_bdd_macros::then;
use taskline::task::{
    domain::{Task, TaskDomainError, TaskStatus},
    services::TaskLifecycleError,
};

fn stored_task(world: &TaskTransitionWorld) -> Result<Task, eyre::Report> {
    let task_id = world.task()?.id();
    run_async(world.service.find_by_id(task_id))?
        .ok_or_else(|| eyre::eyre!("task {task_id} missing from repository"))
}

fn last_error(world: &TaskTransitionWorld) -> Result<&TaskLifecycleError, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(err)) => Ok(err),
        Some(Ok(task)) => Err(eyre::eyre!(
            "expected the action to fail, task is now {}",
            task.status()
        )),
        None => Err(eyre::eyre!("no action was performed")),
    }
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskTransitionWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let stored = stored_task(world)?;

    eyre::ensure!(
        stored.status() == expected,
        "expected status {expected}, found {}",
        stored.status()
    );
    Ok(())
}

#[then(r#"the task is assigned to "{actor}""#)]
fn task_assigned_to(world: &TaskTransitionWorld, actor: String) -> Result<(), eyre::Report> {
    let expected = world
        .employees
        .get(&actor)
        .copied()
        .ok_or_else(|| eyre::eyre!("employee {actor} never acted in this scenario"))?;
    let stored = stored_task(world)?;

    eyre::ensure!(
        stored.assignee_id() == Some(expected),
        "task is assigned to {:?}",
        stored.assignee_id()
    );
    Ok(())
}

#[then("the task progress is {progress:u8}")]
fn task_progress_is(world: &TaskTransitionWorld, progress: u8) -> Result<(), eyre::Report> {
    let stored = stored_task(world)?;

    eyre::ensure!(
        stored.progress().value() == progress,
        "expected progress {progress}, found {}",
        stored.progress()
    );
    Ok(())
}

#[then("the action fails with an illegal transition error")]
fn fails_with_illegal_transition(world: &TaskTransitionWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    eyre::ensure!(
        matches!(
            err,
            TaskLifecycleError::Domain(TaskDomainError::IllegalTransition { .. })
        ),
        "expected IllegalTransition, got {err:?}"
    );
    Ok(())
}

#[then("the action fails with a permission error")]
fn fails_with_permission_error(world: &TaskTransitionWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    eyre::ensure!(
        matches!(
            err,
            TaskLifecycleError::Domain(TaskDomainError::PermissionDenied { .. })
        ),
        "expected PermissionDenied, got {err:?}"
    );
    Ok(())
}

#[then("the action fails with an invalid action error")]
fn fails_with_invalid_action(world: &TaskTransitionWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    eyre::ensure!(
        matches!(err, TaskLifecycleError::InvalidAction(_)),
        "expected InvalidAction, got {err:?}"
    );
    Ok(())
}
