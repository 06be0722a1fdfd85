use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;

use super::ApiSuccess;
use super::MessageData;
use crate::inbound::http::router::AppState;

/// Clear the session cookie. The token itself stays valid until it expires.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, ApiSuccess<MessageData>) {
    let had_session = jar
        .get(&state.cookie.name)
        .is_some_and(|cookie| !cookie.value().is_empty());
    state.user_service.logout(had_session).await;

    let removal = Cookie::build((state.cookie.name.clone(), "")).path("/");

    (
        jar.remove(removal),
        ApiSuccess::new(StatusCode::OK, MessageData::new("Logout success")),
    )
}
