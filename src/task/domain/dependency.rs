//! Dependency graph checks used when editing prerequisites.

use super::{Task, TaskId};
use std::collections::{HashMap, HashSet};

/// Returns `true` when making `task_id` depend on `dependency` would close
/// a cycle, i.e. `dependency` already reaches `task_id` through the
/// prerequisite links of `tasks`.
///
/// The walk is iterative and visits each task at most once, so existing
/// cycles elsewhere in `tasks` cannot stall it.
#[must_use]
pub fn would_create_cycle(task_id: TaskId, dependency: TaskId, tasks: &[Task]) -> bool {
    let by_id: HashMap<TaskId, &Task> = tasks.iter().map(|task| (task.id(), task)).collect();
    let mut visited = HashSet::new();
    let mut stack = vec![dependency];

    while let Some(current) = stack.pop() {
        if current == task_id {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        if let Some(task) = by_id.get(&current) {
            stack.extend(task.depends_on().iter().copied());
        }
    }
    false
}
