//! Repository port for milestone lookup.

use crate::gantt::domain::Milestone;
use crate::task::domain::{MilestoneId, ProjectId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for milestone repository operations.
pub type MilestoneRepositoryResult<T> = Result<T, MilestoneRepositoryError>;

/// Milestone persistence contract.
#[async_trait]
pub trait MilestoneRepository: Send + Sync {
    /// Stores a new milestone.
    ///
    /// # Errors
    ///
    /// Returns [`MilestoneRepositoryError::DuplicateMilestone`] when the
    /// identifier already exists.
    async fn store(&self, milestone: &Milestone) -> MilestoneRepositoryResult<()>;

    /// Lists milestones, optionally restricted to one project.
    async fn list(
        &self,
        project_id: Option<ProjectId>,
    ) -> MilestoneRepositoryResult<Vec<Milestone>>;
}

/// Errors returned by milestone repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MilestoneRepositoryError {
    /// A milestone with the same identifier already exists.
    #[error("duplicate milestone identifier: {0}")]
    DuplicateMilestone(MilestoneId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MilestoneRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
