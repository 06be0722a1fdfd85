use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde::Serialize;

use super::get_task::TaskData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::task::models::Priority;
use crate::domain::task::models::TaskFilter;
use crate::domain::task::models::TaskView;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::task::errors::TaskError;

/// Body of listing responses: `{ "tasks": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskData>,
}

/// Query string shared by every listing route
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    pub priority: Option<String>,
}

impl ListTasksQuery {
    /// An absent or empty priority means every priority.
    fn into_filter(self, view: TaskView) -> Result<TaskFilter, TaskError> {
        let priority = self
            .priority
            .filter(|p| !p.is_empty())
            .map(|p| p.parse::<Priority>())
            .transpose()?;

        Ok(TaskFilter::new(view, priority))
    }
}

pub async fn list_all_tasks(
    state: State<AppState>,
    session: Extension<AuthenticatedUser>,
    query: Query<ListTasksQuery>,
) -> Result<ApiSuccess<TaskListResponse>, ApiError> {
    list_tasks(state, session, query, TaskView::All).await
}

pub async fn list_completed_tasks(
    state: State<AppState>,
    session: Extension<AuthenticatedUser>,
    query: Query<ListTasksQuery>,
) -> Result<ApiSuccess<TaskListResponse>, ApiError> {
    list_tasks(state, session, query, TaskView::Completed).await
}

pub async fn list_pending_tasks(
    state: State<AppState>,
    session: Extension<AuthenticatedUser>,
    query: Query<ListTasksQuery>,
) -> Result<ApiSuccess<TaskListResponse>, ApiError> {
    list_tasks(state, session, query, TaskView::Pending).await
}

pub async fn list_overdue_tasks(
    state: State<AppState>,
    session: Extension<AuthenticatedUser>,
    query: Query<ListTasksQuery>,
) -> Result<ApiSuccess<TaskListResponse>, ApiError> {
    list_tasks(state, session, query, TaskView::Overdue).await
}

async fn list_tasks(
    State(state): State<AppState>,
    Extension(session): Extension<AuthenticatedUser>,
    Query(query): Query<ListTasksQuery>,
    view: TaskView,
) -> Result<ApiSuccess<TaskListResponse>, ApiError> {
    let filter = query.into_filter(view)?;

    state
        .task_service
        .list_tasks(&session.token, filter)
        .await
        .map_err(ApiError::from)
        .map(|tasks| {
            ApiSuccess::new(
                StatusCode::OK,
                TaskListResponse {
                    tasks: tasks.into_iter().map(TaskData::from).collect(),
                },
            )
        })
}
