//! rosterd server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware};
use rosterd_api::{middleware::AppState, router as api_router};
use rosterd_common::Config;
use rosterd_core::{
    AccountService, DuplicateChecker, ImportService, NoOpWelcome, ProvisionService, SmtpWelcome,
    WelcomeService,
};
use rosterd_db::repositories::{
    AccountRepository, RowOutcomeRepository, StudentProfileRepository, UploadJobRepository,
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rosterd=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting rosterd server...");

    // Load configuration
    let config = Config::load()?;

    // Connect to database and run migrations
    let db = rosterd_db::init(&config).await?;
    info!("Connected to database");

    info!("Running database migrations...");
    rosterd_db::migrate(&db).await?;
    info!("Migrations completed");

    // Initialize repositories
    let db = Arc::new(db);
    let account_repo = AccountRepository::new(Arc::clone(&db));
    let student_repo = StudentProfileRepository::new(Arc::clone(&db));
    let job_repo = UploadJobRepository::new(Arc::clone(&db));
    let outcome_repo = RowOutcomeRepository::new(Arc::clone(&db));

    // Welcome delivery: SMTP when enabled, no-op otherwise
    let welcome: WelcomeService = if config.email.enabled {
        info!(host = %config.email.smtp_host, "Welcome mail enabled via SMTP");
        Arc::new(SmtpWelcome::from_config(&config.email, &config.server.url)?)
    } else {
        info!("Welcome mail disabled");
        Arc::new(NoOpWelcome)
    };

    // Initialize services
    let account_service = AccountService::new(account_repo.clone());
    let duplicates = DuplicateChecker::new(account_repo.clone(), student_repo.clone());
    let provisioner = ProvisionService::new(Arc::clone(&db));
    let import_service = ImportService::new(
        job_repo,
        outcome_repo,
        duplicates,
        provisioner,
        welcome,
        &config,
    );

    // Create app state
    let state = AppState {
        account_service,
        import_service,
    };

    // Build router
    let app = Router::new()
        .nest("/api", api_router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rosterd_api::middleware::auth_middleware,
        ))
        .layer(RequestBodyLimitLayer::new(config.import.max_file_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server with graceful shutdown
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
