//! When steps for task state transition BDD scenarios.

use super::world::{TaskTransitionWorld, run_async};
use rstest_bdd_macros::when;
use taskline::task::services::TransitionTaskRequest;

#[when(r#""{actor}" performs "{action}" on the task"#)]
fn perform_action(
    world: &mut TaskTransitionWorld,
    actor: String,
    action: String,
) -> Result<(), eyre::Report> {
    let actor_id = world.employee(&actor);
    let task_id = world.task()?.id();

    let result = run_async(
        world
            .service
            .transition_task(TransitionTaskRequest::new(task_id, action, actor_id)),
    );
    if let Ok(ref updated) = result {
        world.current_task = Some(updated.clone());
    }
    world.last_result = Some(result);
    Ok(())
}
