//! Telegram mirror worker: long-polls a channel and mirrors marked posts
//! into the `news` table.

mod config;
mod mirror;
mod telegram;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::IngestConfig;
use mirror::Mirror;
use telegram::TelegramClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal_ingest=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = IngestConfig::from_env();

    // --- Database ---
    let pool = portal_db::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");

    portal_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    // The API binary normally owns migrations; running them here too lets
    // the worker start first on a fresh database.
    portal_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // --- Mirror loop ---
    let client = TelegramClient::new(&config.bot_token);
    let mirror = Mirror::new(client, pool.clone(), config.upload_dir.clone());
    tracing::info!("Telegram mirror started");

    tokio::select! {
        () = mirror.run() => {}
        _ = shutdown_signal() => {
            tracing::info!("Termination signal received, stopping mirror");
        }
    }

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or SIGTERM.
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
        () = ctrl_c => {}
        () = terminate => {}
    }
}
