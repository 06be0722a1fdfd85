use std::fmt;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::cookie::SameSite;
use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use super::ApiError;
use super::ApiSuccess;
use crate::config::CookieConfig;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::PublicUser;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequestBody>,
) -> Result<(CookieJar, ApiSuccess<LoginResponseData>), ApiError> {
    let outcome = state
        .user_service
        .login(LoginCommand {
            email: body.email,
            password: body.password,
        })
        .await?;

    let cookie = session_cookie(&state.cookie, outcome.token.clone());

    Ok((
        jar.add(cookie),
        ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData {
                message: "Login success".to_string(),
                token: outcome.token,
                user: (&outcome.user).into(),
            },
        ),
    ))
}

/// Session cookie carrying the token. Its lifetime is independent of the token's own expiry.
///
/// `Expires` is left out if now plus the max age is not a representable date;
/// `Max-Age` alone still bounds the cookie.
fn session_cookie(settings: &CookieConfig, token: String) -> Cookie<'static> {
    let max_age = time::Duration::seconds(settings.max_age_hours.saturating_mul(3600));

    let mut cookie = Cookie::build((settings.name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::None)
        .max_age(max_age)
        .build();

    if let Some(expires) = OffsetDateTime::now_utc().checked_add(max_age) {
        cookie.set_expires(expires);
    }

    cookie
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl fmt::Debug for LoginRequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequestBody")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub token: String,
    pub user: UserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<&PublicUser> for UserData {
    fn from(user: &PublicUser) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}
