use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::task::errors::TaskError;

/// Response body for task operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskData {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub status: String,
    pub completed: bool,
    pub priority: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Task> for TaskData {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.to_string(),
            user_id: task.owner_id.to_string(),
            title: task.title,
            description: task.description,
            due_date: task.due_date.to_rfc3339(),
            status: task.status.as_str().to_string(),
            completed: task.completed,
            priority: task.priority.as_str().to_string(),
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.to_rfc3339(),
        }
    }
}

/// Body of single-task responses: `{ "task": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResponse {
    pub task: TaskData,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self { task: task.into() }
    }
}

pub async fn get_task(
    State(state): State<AppState>,
    Extension(session): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<TaskResponse>, ApiError> {
    let task_id = TaskId::from_string(&id).map_err(TaskError::from)?;

    state
        .task_service
        .get_task(&session.token, &task_id)
        .await
        .map_err(ApiError::from)
        .map(|task| ApiSuccess::new(StatusCode::OK, task.into()))
}
