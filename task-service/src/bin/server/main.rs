use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use task_service::access::guard::OwnershipGuard;
use task_service::config::Config;
use task_service::inbound::http::router::create_router;
use task_service::outbound::repositories::PostgresTaskRepository;
use task_service::outbound::repositories::PostgresUserRepository;
use task_service::outbound::security::Argon2PasswordHasher;
use task_service::outbound::security::JwtTokenService;
use task_service::task::service::TaskService;
use task_service::user::service::UserService;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "task_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "task-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_hours = config.jwt.expiration_hours,
        cookie_name = %config.cookie.name,
        cors_origins = config.cors.allowed_origins.len(),
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_service = Arc::new(JwtTokenService::new(
        &config.jwt.secret,
        config.jwt.expiration_hours,
    )?);
    let password_hasher = Arc::new(Argon2PasswordHasher::new());
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let task_repository = Arc::new(PostgresTaskRepository::new(pg_pool));

    let guard = OwnershipGuard::new(Arc::clone(&user_repository), Arc::clone(&token_service));
    let user_service = Arc::new(UserService::new(
        user_repository,
        password_hasher,
        Arc::clone(&token_service),
    ));
    let task_service = Arc::new(TaskService::new(task_repository, guard));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        user_service,
        task_service,
        token_service,
        config.cookie.clone(),
        &config.cors,
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
