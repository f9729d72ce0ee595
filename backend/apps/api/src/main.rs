//! API Server Entry Point
//!
//! Uses `anyhow` for startup errors; request-level errors go through
//! `kernel::error::AppError`.

use anyhow::Context;
use api::app::{build_router, with_http_layers};
use api::config::AppConfig;
use auth::{InMemoryUserRepository, PgUserRepository};
use sqlx::postgres::PgPoolOptions;
use todo::{InMemoryTodoRepository, PgTodoRepository};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,todo=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("Invalid configuration")?;

    if config.ephemeral_secret {
        tracing::warn!("TOKEN_SECRET not set, using a random secret; tokens will not survive a restart");
    }

    let router = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;

            tracing::info!("Connected to database");

            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            tracing::info!("Migrations completed");

            build_router(
                PgUserRepository::new(pool.clone()),
                PgTodoRepository::new(pool),
                config.auth.clone(),
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store; data is lost on exit");
            build_router(
                InMemoryUserRepository::new(),
                InMemoryTodoRepository::new(),
                config.auth.clone(),
            )
        }
    };

    let app = with_http_layers(router, &config.frontend_origins);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
