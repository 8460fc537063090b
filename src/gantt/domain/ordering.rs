//! Dependency-aware ordering of a visible task set.
//!
//! The order is a topological sort over the prerequisite links that stay
//! inside the set, leaning depth-first so a task's dependents follow it
//! directly. That adjacency is what the tree connectors in
//! [`super::tree`] rely on.

use crate::task::domain::{Task, TaskId};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// Returns `tasks` in dependency order.
///
/// The result is always a permutation of the input. Prerequisites that are
/// not part of `tasks` are ignored. Tasks caught in a cycle, and anything
/// that only becomes ready through one, are appended after every resolved
/// task in their original relative order.
#[must_use]
pub fn sort_tasks(tasks: &[Task]) -> Vec<Task> {
    sort_order(tasks)
        .into_iter()
        .filter_map(|index| tasks.get(index).cloned())
        .collect()
}

/// Returns the dependency order of `tasks` as indices into the slice.
///
/// Kahn's algorithm with two twists: ready tasks are ordered by start date
/// (stable, dateless last), and tasks freed by the task just emitted are
/// pushed to the front of the queue rather than the back.
#[must_use]
#[expect(
    clippy::indexing_slicing,
    reason = "every index is produced by enumerating the same task slice"
)]
pub fn sort_order(tasks: &[Task]) -> Vec<usize> {
    let count = tasks.len();
    let mut index_of: HashMap<TaskId, usize> = HashMap::with_capacity(count);
    for (index, task) in tasks.iter().enumerate() {
        index_of.entry(task.id()).or_insert(index);
    }
    let is_node = |index: usize, task: &Task| index_of.get(&task.id()) == Some(&index);

    let mut in_degree = vec![0_usize; count];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); count];
    for (index, task) in tasks.iter().enumerate() {
        if !is_node(index, task) {
            continue;
        }
        for prerequisite in task.depends_on() {
            if let Some(&parent) = index_of.get(prerequisite) {
                in_degree[index] += 1;
                dependents[parent].push(index);
            }
        }
    }

    let mut seeds: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|&(index, task)| is_node(index, task) && in_degree[index] == 0)
        .map(|(index, _)| index)
        .collect();
    sort_by_start(&mut seeds, tasks);
    let mut queue: VecDeque<usize> = seeds.into();

    let mut emitted = vec![false; count];
    let mut order = Vec::with_capacity(count);
    while let Some(current) = queue.pop_front() {
        if emitted[current] {
            continue;
        }
        emitted[current] = true;
        order.push(current);

        let mut freed = Vec::new();
        for &dependent in &dependents[current] {
            in_degree[dependent] = in_degree[dependent].saturating_sub(1);
            if in_degree[dependent] == 0 && !emitted[dependent] {
                freed.push(dependent);
            }
        }
        sort_by_start(&mut freed, tasks);
        for &index in freed.iter().rev() {
            queue.push_front(index);
        }
    }

    let resolved = order.len();
    order.extend((0..count).filter(|&index| !emitted[index]));
    if order.len() > resolved {
        debug!(
            unresolved = order.len() - resolved,
            total = count,
            "tasks left in dependency cycles appended to the order"
        );
    }
    order
}

/// Compares planned start dates; dateless tasks sort after dated ones.
#[must_use]
pub fn compare_start(left: Option<NaiveDate>, right: Option<NaiveDate>) -> Ordering {
    match (left, right) {
        (Some(left_date), Some(right_date)) => left_date.cmp(&right_date),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn sort_by_start(indices: &mut [usize], tasks: &[Task]) {
    let start_of = |index: usize| tasks.get(index).and_then(Task::start_date);
    indices.sort_by(|&left, &right| compare_start(start_of(left), start_of(right)));
}
