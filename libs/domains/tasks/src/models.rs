use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Task entity - a single text item with a completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier, assigned by the persistence layer
    pub id: i32,
    /// Task description
    pub text: String,
    /// Whether the task is completed
    pub completed: bool,
    /// Creation timestamp; immutable, the sole ordering key
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new task.
///
/// `text` is optional at the deserialization boundary so that both a
/// missing key and an empty string flow into the same rejection in the
/// service layer. Clients never see a task without text.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateTask {
    pub text: Option<String>,
}

/// DTO for partially updating a task.
///
/// Fields absent from the request body are left untouched. Note that
/// empty `text` is accepted here: updates are deliberately looser than
/// creation, matching the API's long-standing observable behavior.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateTask {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl Task {
    /// Apply a partial update, touching only the fields that are present.
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(text) = update.text {
            self.text = text;
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: 1,
            text: "Buy milk".to_string(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_apply_update_completed_only_keeps_text() {
        let mut task = sample_task();
        task.apply_update(UpdateTask {
            text: None,
            completed: Some(true),
        });

        assert_eq!(task.text, "Buy milk");
        assert!(task.completed);
    }

    #[test]
    fn test_apply_update_text_only_keeps_completed() {
        let mut task = sample_task();
        task.apply_update(UpdateTask {
            text: Some("Buy oat milk".to_string()),
            completed: None,
        });

        assert_eq!(task.text, "Buy oat milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_apply_update_empty_object_is_a_noop() {
        let mut task = sample_task();
        let before = task.clone();
        task.apply_update(UpdateTask::default());

        assert_eq!(task, before);
    }

    #[test]
    fn test_create_task_deserializes_missing_key() {
        let input: CreateTask = serde_json::from_str("{}").unwrap();
        assert!(input.text.is_none());
    }

    #[test]
    fn test_task_serializes_created_at_as_rfc3339() {
        let task = sample_task();
        let json = serde_json::to_value(&task).unwrap();

        let created_at = json["created_at"].as_str().unwrap();
        assert!(created_at.parse::<DateTime<Utc>>().is_ok());
    }
}
