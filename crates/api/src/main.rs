use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use msgapi_api::config::{ServerConfig, StorageBackend};
use msgapi_api::router::{build_app_router, build_memory_app_router};
use msgapi_api::state::{AppState, MemoryState};
use msgapi_core::message_store::MessageManager;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "msgapi_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(
        host = %config.host,
        port = config.port,
        storage = %config.storage,
        "Loaded server configuration"
    );

    // --- Storage + router ---
    let app = match config.storage {
        StorageBackend::Memory => build_memory_app(&config),
        StorageBackend::Postgres => build_postgres_app(&config).await,
    };

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

fn build_memory_app(config: &ServerConfig) -> Router {
    let state = MemoryState {
        messages: Arc::new(MessageManager::new()),
        config: Arc::new(config.clone()),
    };
    tracing::info!("In-memory message store created");

    build_memory_app_router(state, config)
}

async fn build_postgres_app(config: &ServerConfig) -> Router {
    let db = config
        .database
        .as_ref()
        .expect("postgres backend configured without database settings");

    let pool = msgapi_db::create_pool(&db.url, db.max_connections)
        .await
        .expect("Failed to connect to database");
    tracing::info!(max_connections = db.max_connections, "Database connection pool created");

    msgapi_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    msgapi_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };

    build_app_router(state, config)
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
