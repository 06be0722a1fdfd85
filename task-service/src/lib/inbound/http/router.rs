use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_task::create_task;
use super::handlers::delete_task::delete_task;
use super::handlers::get_profile::get_profile;
use super::handlers::get_task::get_task;
use super::handlers::list_tasks::list_all_tasks;
use super::handlers::list_tasks::list_completed_tasks;
use super::handlers::list_tasks::list_overdue_tasks;
use super::handlers::list_tasks::list_pending_tasks;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::register::register;
use super::handlers::update_profile::update_profile;
use super::handlers::update_task::update_task;
use super::middleware::authenticate as auth_middleware;
use crate::config::CookieConfig;
use crate::config::CorsConfig;
use crate::domain::access::ports::TokenServicePort;
use crate::domain::task::ports::TaskServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub task_service: Arc<dyn TaskServicePort>,
    pub token_service: Arc<dyn TokenServicePort>,
    pub cookie: CookieConfig,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    task_service: Arc<dyn TaskServicePort>,
    token_service: Arc<dyn TokenServicePort>,
    cookie: CookieConfig,
    cors: &CorsConfig,
) -> Router {
    let state = AppState {
        user_service,
        task_service,
        token_service,
        cookie,
    };

    let public_routes = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/user/register", post(register))
        .route("/api/user/login", post(login))
        .route("/api/user/logout", post(logout));

    let protected_routes = Router::new()
        .route("/api/user", get(get_profile))
        .route("/api/user/:user_id", put(update_profile))
        .route("/api/task", post(create_task).get(list_all_tasks))
        .route("/api/task/complete", get(list_completed_tasks))
        .route("/api/task/pending", get(list_pending_tasks))
        .route("/api/task/overdue", get(list_overdue_tasks))
        .route(
            "/api/task/:task_id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            // Headers are left out: they carry the session cookie.
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(cors_layer(cors))
        .with_state(state)
}

/// Credentialed CORS for the configured origins, permissive when none are set.
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
