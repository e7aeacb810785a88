use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{TaskError, TaskResult};
use crate::models::{Task, UpdateTask};

/// Repository trait for Task persistence.
///
/// Mirrors the storage contract exactly: one call per lifecycle action,
/// no batching, no transactions spanning calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task with the given text; the store assigns the id.
    async fn create(&self, text: String) -> TaskResult<Task>;

    /// Get a task by ID
    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>>;

    /// List all tasks ordered by created_at descending (newest first)
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Apply a partial update to an existing task
    async fn update(&self, id: i32, input: UpdateTask) -> TaskResult<Task>;

    /// Delete a task by ID; returns whether a row was removed
    async fn delete(&self, id: i32) -> TaskResult<bool>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    next_id: i32,
    tasks: HashMap<i32, Task>,
}

/// In-memory implementation of TaskRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, text: String) -> TaskResult<Task> {
        let mut state = self.state.write().await;

        state.next_id += 1;
        let task = Task {
            id: state.next_id,
            text,
            completed: false,
            created_at: chrono::Utc::now(),
        };
        state.tasks.insert(task.id, task.clone());

        tracing::info!(task_id = task.id, "Created task");
        Ok(task)
    }

    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list(&self) -> TaskResult<Vec<Task>> {
        let state = self.state.read().await;

        let mut result: Vec<Task> = state.tasks.values().cloned().collect();

        // Newest first; the pre-sort by id makes the stable sort break
        // created_at ties in insertion order.
        result.sort_by_key(|t| t.id);
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result)
    }

    async fn update(&self, id: i32, input: UpdateTask) -> TaskResult<Task> {
        let mut state = self.state.write().await;

        let task = state.tasks.get_mut(&id).ok_or(TaskError::NotFound(id))?;
        task.apply_update(input);
        let updated = task.clone();

        tracing::info!(task_id = id, "Updated task");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> TaskResult<bool> {
        let mut state = self.state.write().await;

        if state.tasks.remove(&id).is_some() {
            tracing::info!(task_id = id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
