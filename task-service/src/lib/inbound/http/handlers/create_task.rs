use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::get_task::TaskResponse;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Priority;
use crate::domain::task::models::TaskStatus;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::task::errors::TaskError;

/// HTTP request body for creating a task (raw JSON)
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub status: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub priority: Option<String>,
}

impl CreateTaskRequest {
    fn try_into_command(self) -> Result<CreateTaskCommand, TaskError> {
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

        Ok(CreateTaskCommand {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            status,
            completed: self.completed,
            priority,
        })
    }
}

pub async fn create_task(
    State(state): State<AppState>,
    Extension(session): Extension<AuthenticatedUser>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<ApiSuccess<TaskResponse>, ApiError> {
    let command = req.try_into_command()?;

    state
        .task_service
        .create_task(&session.token, command)
        .await
        .map_err(ApiError::from)
        .map(|task| ApiSuccess::new(StatusCode::CREATED, task.into()))
}
