//! HTTP entry point for the task-tracking backend.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use thiserror::Error;
use todo_api::{
    config::{AppConfig, ConfigError},
    http,
    task::{
        adapters::{
            memory::InMemoryTaskRepository,
            postgres::{PostgresTaskRepository, connect},
        },
        ports::{TaskRepository, TaskRepositoryError},
        services::{TaskLifecycleService, TaskSeeder},
    },
    telemetry::{self, TelemetryError},
};
use tokio::net::TcpListener;

/// Errors that abort process startup.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to connect to database: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;
    telemetry::init(config.log_format)?;
    tracing::debug!(?config, "loaded configuration");

    let repository = open_repository(&config).await?;
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(DefaultClock);

    if config.seed {
        TaskSeeder::new(Arc::clone(&repository), Arc::clone(&clock))
            .seed_if_empty()
            .await?;
    }

    let app = http::router(TaskLifecycleService::new(repository, clock));
    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn open_repository(config: &AppConfig) -> Result<Arc<dyn TaskRepository>, StartupError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::info!("using in-memory task store");
        return Ok(Arc::new(InMemoryTaskRepository::new()));
    };

    let pool = tokio::task::block_in_place(|| connect(database_url))?;
    let repository = PostgresTaskRepository::new(pool);
    repository.ensure_schema().await?;
    tracing::info!("using PostgreSQL task store");
    Ok(Arc::new(repository))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
