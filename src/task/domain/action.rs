//! Actions an employee can request against a task.

use super::ParseTaskActionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle action requested against a task.
///
/// The lowercase representation matches the `POST /tasks/:id/<action>`
/// route segment used by the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    /// Take an unclaimed task.
    Claim,
    /// Give a claimed task back to the pool.
    Unclaim,
    /// Begin work on a claimed task.
    Start,
    /// Temporarily stop work.
    Pause,
    /// Continue after a pause or a blocker.
    Resume,
    /// Flag the task as blocked.
    Block,
    /// Clear a blocker.
    Unblock,
    /// Finish the task.
    Complete,
}

impl TaskAction {
    /// Every action, in table order.
    pub const ALL: [Self; 8] = [
        Self::Claim,
        Self::Unclaim,
        Self::Start,
        Self::Pause,
        Self::Resume,
        Self::Block,
        Self::Unblock,
        Self::Complete,
    ];

    /// Returns the route segment for this action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Claim => "claim",
            Self::Unclaim => "unclaim",
            Self::Start => "start",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Block => "block",
            Self::Unblock => "unblock",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskAction {
    type Error = ParseTaskActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "claim" => Ok(Self::Claim),
            "unclaim" => Ok(Self::Unclaim),
            "start" => Ok(Self::Start),
            "pause" => Ok(Self::Pause),
            "resume" => Ok(Self::Resume),
            "block" => Ok(Self::Block),
            "unblock" => Ok(Self::Unblock),
            "complete" => Ok(Self::Complete),
            _ => Err(ParseTaskActionError(value.to_owned())),
        }
    }
}
