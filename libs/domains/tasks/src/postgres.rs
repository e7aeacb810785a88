use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{Task, UpdateTask},
    repository::TaskRepository,
};

/// PostgreSQL implementation of TaskRepository backed by sea-orm.
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> TaskError {
    TaskError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, text: String) -> TaskResult<Task> {
        let model = entity::new_task(text)
            .insert(&self.db)
            .await
            .map_err(db_error)?;

        tracing::info!(task_id = model.id, "Created task");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: i32, input: UpdateTask) -> TaskResult<Task> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?
            .ok_or(TaskError::NotFound(id))?;

        // Apply the partial update in the domain model, then write the
        // mutable columns back. created_at is never touched.
        let mut task: Task = model.into();
        task.apply_update(input);

        let active_model = entity::ActiveModel {
            id: Set(task.id),
            text: Set(task.text.clone()),
            completed: Set(task.completed),
            created_at: Set(task.created_at.into()),
        };

        let updated = active_model.update(&self.db).await.map_err(db_error)?;

        tracing::info!(task_id = id, "Updated task");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> TaskResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected > 0 {
            tracing::info!(task_id = id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
