//! razzies-api - Golden Raspberry Awards producer intervals service
//!
//! Startup: resolve configuration, open the SQLite database, seed it from
//! the CSV on first run, then serve the read-only HTTP API.

use anyhow::{Context, Result};
use clap::Parser;
use razzies_common::config::{default_config_path, ConfigOverrides, ServiceConfig, TomlConfig};
use razzies_common::db::{init_database, seed_movies_from_csv, SeedOutcome};
use razzies_api::{build_router, AppState};
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "razzies-api")]
#[command(about = "Worst-movie producer award intervals service")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "RAZZIES_CONFIG")]
    config: Option<PathBuf>,

    /// Root folder holding the database and seed CSV (env: RAZZIES_ROOT_FOLDER)
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// SQLite database file
    #[arg(short, long, env = "RAZZIES_DATABASE")]
    database: Option<PathBuf>,

    /// Seed CSV file (semicolon-delimited)
    #[arg(long, env = "RAZZIES_CSV_PATH")]
    csv: Option<PathBuf>,

    /// Host to bind
    #[arg(long, env = "RAZZIES_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "RAZZIES_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let toml_config = match args.config.clone().or_else(default_config_path) {
        Some(path) => TomlConfig::load(&path).context("Failed to load configuration file")?,
        None => TomlConfig::default(),
    };

    let overrides = ConfigOverrides {
        root_folder: args.root_folder,
        database_path: args.database,
        csv_path: args.csv,
        host: args.host,
        port: args.port,
    };
    let config = ServiceConfig::resolve(overrides, toml_config);

    // RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    info!(
        "Starting razzies-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Root folder: {}", config.root_folder.display());

    config
        .ensure_root_folder()
        .context("Failed to initialize root folder")?;

    info!("Database path: {}", config.database_path.display());
    let pool = match init_database(&config.database_path).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e.into());
        }
    };

    match seed_movies_from_csv(&pool, &config.csv_path)
        .await
        .context("Failed to initialize database with CSV")?
    {
        SeedOutcome::Skipped { existing } => info!("Using {} existing movies", existing),
        SeedOutcome::Loaded { rows, skipped } => {
            info!("✓ Seeded {} movies ({} lines skipped)", rows, skipped)
        }
    }

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("razzies-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
