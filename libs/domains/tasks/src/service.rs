use std::sync::Arc;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer owning the task lifecycle rules.
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all tasks, newest first.
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list().await
    }

    /// Create a new task.
    ///
    /// Rejects a missing *or empty* text with the same validation error
    /// before anything is persisted: the check is on truthiness, not
    /// key presence.
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        let text = match input.text {
            Some(text) if !text.is_empty() => text,
            _ => return Err(TaskError::text_required()),
        };

        self.repository.create(text).await
    }

    /// Get a task by ID
    pub async fn get_task(&self, id: i32) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// Partially update a task.
    ///
    /// Unlike creation, no text validation happens here; an explicit
    /// empty string is written as-is. Updates are looser than creation
    /// by contract.
    pub async fn update_task(&self, id: i32, input: UpdateTask) -> TaskResult<Task> {
        self.repository.update(id, input).await
    }

    /// Delete a task permanently.
    pub async fn delete_task(&self, id: i32) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTaskRepository;
    use chrono::Utc;

    fn task_with_text(id: i32, text: &str) -> Task {
        Task {
            id,
            text: text.to_string(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_task_with_text() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_create()
            .with(mockall::predicate::eq("Buy milk".to_string()))
            .returning(|text| Ok(task_with_text(1, &text)));

        let service = TaskService::new(mock_repo);
        let task = service
            .create_task(CreateTask {
                text: Some("Buy milk".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[tokio::test]
    async fn test_create_task_rejects_missing_text() {
        let mut mock_repo = MockTaskRepository::new();
        // The repository must never be reached
        mock_repo.expect_create().never();

        let service = TaskService::new(mock_repo);
        let result = service.create_task(CreateTask { text: None }).await;

        assert!(matches!(result, Err(TaskError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_task_rejects_empty_text() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_create().never();

        let service = TaskService::new(mock_repo);
        let result = service
            .create_task(CreateTask {
                text: Some(String::new()),
            })
            .await;

        assert_eq!(result.unwrap_err().to_string(), "Task text required");
    }

    #[tokio::test]
    async fn test_empty_text_accepted_on_update() {
        // Creation rejects empty text; update writes it verbatim. The
        // asymmetry is part of the observed contract.
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_update().returning(|id, input| {
            let mut task = task_with_text(id, "old");
            task.apply_update(input);
            Ok(task)
        });

        let service = TaskService::new(mock_repo);
        let updated = service
            .update_task(
                1,
                UpdateTask {
                    text: Some(String::new()),
                    completed: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.text, "");
    }

    #[tokio::test]
    async fn test_delete_task_maps_missing_row_to_not_found() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = TaskService::new(mock_repo);
        let result = service.delete_task(42).await;

        assert!(matches!(result, Err(TaskError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_get_task_maps_none_to_not_found() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = TaskService::new(mock_repo);
        let result = service.get_task(7).await;

        assert!(matches!(result, Err(TaskError::NotFound(7))));
    }
}
