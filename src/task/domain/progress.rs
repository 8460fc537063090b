//! Validated completion percentage.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion percentage in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Progress(u8);

impl Progress {
    /// No work done.
    pub const ZERO: Self = Self(0);
    /// Work finished.
    pub const COMPLETE: Self = Self(100);

    /// Creates a validated progress value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidProgress`] when `value` exceeds 100.
    pub const fn new(value: u8) -> Result<Self, TaskDomainError> {
        if value > 100 {
            return Err(TaskDomainError::InvalidProgress(value));
        }
        Ok(Self(value))
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` for 100%.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.0 == 100
    }
}

impl TryFrom<u8> for Progress {
    type Error = TaskDomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for u8 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
