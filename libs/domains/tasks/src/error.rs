use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task {0} not found")]
    NotFound(i32),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TaskResult<T> = Result<T, TaskError>;

impl TaskError {
    /// The one rejection the create endpoint emits: missing key, empty
    /// string and unparseable body all collapse into it.
    pub fn text_required() -> Self {
        TaskError::Validation("Task text required".to_string())
    }
}

/// Convert TaskError to AppError for standardized error responses
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(id) => AppError::NotFound(format!("Task {} not found", id)),
            TaskError::Validation(msg) => AppError::BadRequest(msg),
            TaskError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized {"error": ...} body
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = TaskError::NotFound(42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_validation_maps_to_400() {
        let response = TaskError::text_required().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_text_required_message() {
        assert_eq!(TaskError::text_required().to_string(), "Task text required");
    }
}
