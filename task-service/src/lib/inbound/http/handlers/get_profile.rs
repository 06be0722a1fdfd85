use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Profile of a user as exposed over HTTP. Never includes the password digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileData {
    pub id: String,
    pub email: String,
    pub name: String,
    pub bio: String,
    pub photo: String,
    pub role: String,
    pub is_verified: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for ProfileData {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            name: user.name,
            bio: user.bio,
            photo: user.photo,
            role: user.role.as_str().to_string(),
            is_verified: user.is_verified,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

/// Body of profile responses: `{ "user": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponse {
    pub user: ProfileData,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self { user: user.into() }
    }
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(session): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<ProfileResponse>, ApiError> {
    state
        .user_service
        .current_user(&session.token)
        .await
        .map_err(ApiError::from)
        .map(|user| ApiSuccess::new(StatusCode::OK, user.into()))
}
