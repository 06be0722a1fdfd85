use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::access::errors::AccessError;
use crate::task::errors::TaskError;
use crate::user::errors::UserError;

pub mod create_task;
pub mod delete_task;
pub mod get_profile;
pub mod get_task;
pub mod list_tasks;
pub mod login;
pub mod logout;
pub mod register;
pub mod update_profile;
pub mod update_task;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Successful response: the status plus a JSON body written at the top level.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(MessageData::new(message))).into_response()
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::InvalidToken => ApiError::Unauthorized(err.to_string()),
            AccessError::UserNotFound => ApiError::NotFound(err.to_string()),
            AccessError::PermissionDenied => ApiError::Forbidden(err.to_string()),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            // Registration and login failures are all reported as 400
            UserError::InvalidUserId(_)
            | UserError::InvalidEmail(_)
            | UserError::Validation(_)
            | UserError::EmailAlreadyExists(_)
            | UserError::EmailNotFound
            | UserError::InvalidCredentials => ApiError::BadRequest(err.to_string()),
            UserError::NotFound(_) => ApiError::NotFound("User not found".to_string()),
            UserError::Access(access) => access.into(),
            UserError::PasswordHashing(_)
            | UserError::Token(_)
            | UserError::DatabaseError(_) => {
                tracing::error!(error = %err, "User operation failed");
                ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
            }
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::InvalidTaskId(_)
            | TaskError::InvalidPriority(_)
            | TaskError::InvalidStatus(_)
            | TaskError::Validation(_) => ApiError::BadRequest(err.to_string()),
            TaskError::NotFound(_) => ApiError::NotFound("Task not found".to_string()),
            TaskError::Access(access) => access.into(),
            TaskError::DatabaseError(_) => {
                tracing::error!(error = %err, "Task operation failed");
                ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
            }
        }
    }
}

/// Body of responses that only carry a message, errors included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
