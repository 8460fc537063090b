//! Milestone markers drawn on the timeline.

use crate::task::domain::{MilestoneId, ProjectId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated project milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    id: MilestoneId,
    project_id: ProjectId,
    name: String,
    date: NaiveDate,
}

impl Milestone {
    /// Creates a milestone.
    #[must_use]
    pub fn new(
        id: MilestoneId,
        project_id: ProjectId,
        name: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            project_id,
            name: name.into(),
            date,
        }
    }

    /// Returns the milestone identifier.
    #[must_use]
    pub const fn id(&self) -> MilestoneId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the milestone's due date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}
