//! Planned schedule window for a task.
//!
//! Tasks carry their start and due dates as independent optional fields.
//! Timeline code only accepts a [`Schedule`], which exists when both dates
//! are present, so dateless tasks have to be filtered or branched on
//! explicitly at the call site.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Start and due date of a task, both present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    start: NaiveDate,
    due: NaiveDate,
}

impl Schedule {
    /// Creates a schedule from its two dates.
    ///
    /// A due date before the start date is accepted as-is: the data layer
    /// owns date validation and the timeline renders whatever it is given.
    #[must_use]
    pub const fn new(start: NaiveDate, due: NaiveDate) -> Self {
        Self { start, due }
    }

    /// Builds a schedule when both optional dates are present.
    #[must_use]
    pub fn from_parts(start: Option<NaiveDate>, due: Option<NaiveDate>) -> Option<Self> {
        Some(Self::new(start?, due?))
    }

    /// Returns the planned start date.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the planned due date.
    #[must_use]
    pub const fn due(&self) -> NaiveDate {
        self.due
    }

    /// Number of calendar days covered, counting both ends.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.due - self.start).num_days() + 1
    }
}
