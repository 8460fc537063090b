//! Tree-guide connectors for a dependency-ordered task list.

use crate::task::domain::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// How one level of a task's ancestry is drawn in the timeline gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeConnector {
    /// An ancestor lane that continues below this row.
    Line,
    /// This task, with more siblings below it.
    Branch,
    /// This task, as the final child of its parent.
    Last,
    /// An ancestor lane that has already ended.
    Empty,
}

impl TreeConnector {
    /// Returns the lowercase name used by renderers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Branch => "branch",
            Self::Last => "last",
            Self::Empty => "empty",
        }
    }
}

/// Builds the connector list of every task in `ordered`.
///
/// `ordered` must already be in dependency order (see
/// [`super::ordering::sort_tasks`]). Each task hangs under its primary
/// parent: the prerequisite that appears latest in `ordered`. Roots map to
/// an empty list. Each list runs from the outermost ancestor level to the
/// task's own level.
#[must_use]
pub fn build_tree_connectors(ordered: &[Task]) -> HashMap<TaskId, Vec<TreeConnector>> {
    let forest = PrimaryForest::from_ordered(ordered);
    ordered
        .iter()
        .map(|task| (task.id(), forest.connectors(task.id())))
        .collect()
}

/// Primary-parent links derived from an ordered task list.
struct PrimaryForest {
    parent: HashMap<TaskId, TaskId>,
    children: HashMap<TaskId, Vec<TaskId>>,
}

impl PrimaryForest {
    fn from_ordered(ordered: &[Task]) -> Self {
        let position: HashMap<TaskId, usize> = ordered
            .iter()
            .enumerate()
            .map(|(index, task)| (task.id(), index))
            .collect();

        let mut parent = HashMap::new();
        let mut children: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
        for task in ordered {
            let primary = task
                .depends_on()
                .iter()
                .filter_map(|id| position.get(id).map(|&index| (index, *id)))
                .fold(None, |best: Option<(usize, TaskId)>, candidate| match best {
                    Some(current) if current.0 >= candidate.0 => Some(current),
                    _ => Some(candidate),
                });
            if let Some((_, primary_id)) = primary {
                parent.insert(task.id(), primary_id);
                children.entry(primary_id).or_default().push(task.id());
            }
        }
        Self { parent, children }
    }

    /// Returns the chain from the top-most ancestor's child down to `task_id`.
    ///
    /// Stops at a root, or at the first repeated node when the links loop.
    fn ancestor_chain(&self, task_id: TaskId) -> Vec<TaskId> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = task_id;
        while let Some(&next) = self.parent.get(&current) {
            if !seen.insert(current) {
                break;
            }
            chain.push(current);
            current = next;
        }
        chain.reverse();
        chain
    }

    fn is_last_child(&self, node: TaskId) -> bool {
        self.parent
            .get(&node)
            .and_then(|parent| self.children.get(parent))
            .and_then(|siblings| siblings.last())
            == Some(&node)
    }

    fn connectors(&self, task_id: TaskId) -> Vec<TreeConnector> {
        let chain = self.ancestor_chain(task_id);
        let own_level = chain.len().saturating_sub(1);
        chain
            .iter()
            .enumerate()
            .map(|(level, &node)| {
                let is_last = self.is_last_child(node);
                match (level == own_level, is_last) {
                    (true, true) => TreeConnector::Last,
                    (true, false) => TreeConnector::Branch,
                    (false, true) => TreeConnector::Empty,
                    (false, false) => TreeConnector::Line,
                }
            })
            .collect()
    }
}
