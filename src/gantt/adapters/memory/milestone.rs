//! In-memory milestone repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::gantt::{
    domain::Milestone,
    ports::{MilestoneRepository, MilestoneRepositoryError, MilestoneRepositoryResult},
};
use crate::task::domain::ProjectId;

/// Thread-safe in-memory milestone repository. Lists in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMilestoneRepository {
    milestones: Arc<RwLock<Vec<Milestone>>>,
}

impl InMemoryMilestoneRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> MilestoneRepositoryError {
    MilestoneRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl MilestoneRepository for InMemoryMilestoneRepository {
    async fn store(&self, milestone: &Milestone) -> MilestoneRepositoryResult<()> {
        let mut milestones = self.milestones.write().map_err(poisoned)?;
        if milestones.iter().any(|stored| stored.id() == milestone.id()) {
            return Err(MilestoneRepositoryError::DuplicateMilestone(milestone.id()));
        }
        milestones.push(milestone.clone());
        Ok(())
    }

    async fn list(
        &self,
        project_id: Option<ProjectId>,
    ) -> MilestoneRepositoryResult<Vec<Milestone>> {
        let milestones = self.milestones.read().map_err(poisoned)?;
        Ok(milestones
            .iter()
            .filter(|milestone| project_id.is_none_or(|id| milestone.project_id() == id))
            .cloned()
            .collect())
    }
}
