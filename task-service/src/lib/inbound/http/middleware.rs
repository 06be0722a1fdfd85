use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use crate::domain::access::errors::AccessError;
use crate::domain::access::models::SessionToken;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the verified session token in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub token: SessionToken,
}

/// Middleware that validates the session cookie before any handler runs
pub async fn authenticate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = jar
        .get(&state.cookie.name)
        .map(|cookie| SessionToken::new(cookie.value()))
        .filter(|token| !token.as_str().is_empty())
        .ok_or_else(|| {
            ApiError::Unauthorized("User not authenticated".to_string()).into_response()
        })?;

    state.token_service.verify(&token).map_err(|e| {
        tracing::warn!(uri = %req.uri(), "Session token rejected");
        ApiError::from(AccessError::from(e)).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { token });

    Ok(next.run(req).await)
}
