//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskQuery, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Listing returns tasks in insertion order so downstream ordering stays
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    insertion_order: Vec<TaskId>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when two tasks share an
    /// identifier.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> TaskRepositoryResult<Self> {
        let repository = Self::new();
        {
            let mut state = repository.write_state()?;
            for task in tasks {
                insert(&mut state, task)?;
            }
        }
        Ok(repository)
    }

    fn write_state(
        &self,
    ) -> TaskRepositoryResult<std::sync::RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn read_state(
        &self,
    ) -> TaskRepositoryResult<std::sync::RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn insert(state: &mut InMemoryTaskState, task: Task) -> TaskRepositoryResult<()> {
    let id = task.id();
    if state.tasks.contains_key(&id) {
        return Err(TaskRepositoryError::DuplicateTask(id));
    }
    state.insertion_order.push(id);
    state.tasks.insert(id, task);
    Ok(())
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write_state()?;
        insert(&mut state, task.clone())
    }

    async fn update(
        &self,
        task: &Task,
        expected_revision: u64,
    ) -> TaskRepositoryResult<()> {
        let mut state = self.write_state()?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        if stored.revision() != expected_revision {
            return Err(TaskRepositoryError::Conflict(task.id()));
        }
        *stored = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read_state()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read_state()?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.tasks.get(id))
            .filter(|task| query.matches(task))
            .cloned()
            .collect())
    }
}
