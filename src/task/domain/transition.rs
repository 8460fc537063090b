//! Static status transition table.
//!
//! The table is shared by every task and never persisted. Guards are part
//! of each rule so callers can check permissions before consulting the
//! status columns.

use super::{EmployeeId, TaskAction, TaskStatus};

/// Who may trigger a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionGuard {
    /// Anyone may act when the task is unassigned; otherwise only the
    /// current assignee.
    UnassignedOrAssignee,
    /// Only the current assignee may act.
    AssigneeOnly,
}

impl TransitionGuard {
    /// Returns `true` when `actor` passes the guard for a task currently
    /// assigned to `assignee`.
    #[must_use]
    pub fn permits(self, assignee: Option<EmployeeId>, actor: EmployeeId) -> bool {
        match self {
            Self::UnassignedOrAssignee => assignee.is_none_or(|current| current == actor),
            Self::AssigneeOnly => assignee == Some(actor),
        }
    }
}

/// A single `(from, action, to, guard)` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Action the rule applies to.
    pub action: TaskAction,
    /// Statuses the action is legal from.
    pub from: &'static [TaskStatus],
    /// Status the task ends up in.
    pub to: TaskStatus,
    /// Permission check evaluated before the status lookup.
    pub guard: TransitionGuard,
}

impl Transition {
    /// Returns `true` when the rule accepts `status` as its source.
    #[must_use]
    pub fn accepts(&self, status: TaskStatus) -> bool {
        self.from.contains(&status)
    }
}

/// The complete transition table, one rule per action.
pub const TRANSITION_TABLE: [Transition; 8] = [
    Transition {
        action: TaskAction::Claim,
        from: &[TaskStatus::Unclaimed],
        to: TaskStatus::Claimed,
        guard: TransitionGuard::UnassignedOrAssignee,
    },
    Transition {
        action: TaskAction::Unclaim,
        from: &[TaskStatus::Claimed],
        to: TaskStatus::Unclaimed,
        guard: TransitionGuard::AssigneeOnly,
    },
    Transition {
        action: TaskAction::Start,
        from: &[TaskStatus::Claimed],
        to: TaskStatus::InProgress,
        guard: TransitionGuard::AssigneeOnly,
    },
    Transition {
        action: TaskAction::Pause,
        from: &[TaskStatus::InProgress],
        to: TaskStatus::Paused,
        guard: TransitionGuard::AssigneeOnly,
    },
    Transition {
        action: TaskAction::Resume,
        from: &[TaskStatus::Paused, TaskStatus::Blocked],
        to: TaskStatus::InProgress,
        guard: TransitionGuard::AssigneeOnly,
    },
    Transition {
        action: TaskAction::Block,
        from: &[TaskStatus::InProgress],
        to: TaskStatus::Blocked,
        guard: TransitionGuard::AssigneeOnly,
    },
    Transition {
        action: TaskAction::Unblock,
        from: &[TaskStatus::Blocked],
        to: TaskStatus::InProgress,
        guard: TransitionGuard::AssigneeOnly,
    },
    // Completing a paused or blocked task requires resuming it first.
    Transition {
        action: TaskAction::Complete,
        from: &[TaskStatus::InProgress],
        to: TaskStatus::Done,
        guard: TransitionGuard::AssigneeOnly,
    },
];

/// Returns the rule governing `action`, or `None` when the table has no
/// row for it.
#[must_use]
pub fn rule_for(action: TaskAction) -> Option<&'static Transition> {
    TRANSITION_TABLE.iter().find(|rule| rule.action == action)
}

/// Returns `true` when `action` is legal from `status`.
#[must_use]
pub fn can_transition(status: TaskStatus, action: TaskAction) -> bool {
    rule_for(action).is_some_and(|rule| rule.accepts(status))
}

/// Returns the status `action` leads to from `status`, or `None` when the
/// action is illegal there.
#[must_use]
pub fn next_status(status: TaskStatus, action: TaskAction) -> Option<TaskStatus> {
    rule_for(action)
        .filter(|rule| rule.accepts(status))
        .map(|rule| rule.to)
}
