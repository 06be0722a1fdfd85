use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::get_task::TaskResponse;
use crate::domain::task::models::Priority;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::TaskStatus;
use crate::domain::task::models::UpdateTaskCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::task::errors::TaskError;

/// HTTP request body for updating a task (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
}

impl UpdateTaskRequest {
    fn try_into_command(self) -> Result<UpdateTaskCommand, TaskError> {
        let status = self
            .status
            .as_deref()
            .map(str::parse::<TaskStatus>)
            .transpose()?;
        let priority = self
            .priority
            .as_deref()
            .map(str::parse::<Priority>)
            .transpose()?;

        Ok(UpdateTaskCommand {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            status,
            completed: self.completed,
            priority,
        })
    }
}

pub async fn update_task(
    State(state): State<AppState>,
    Extension(session): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<ApiSuccess<TaskResponse>, ApiError> {
    let task_id = TaskId::from_string(&id).map_err(TaskError::from)?;
    let command = req.try_into_command()?;

    state
        .task_service
        .update_task(&session.token, &task_id, command)
        .await
        .map_err(ApiError::from)
        .map(|task| ApiSuccess::new(StatusCode::OK, task.into()))
}
