//! Portico - desktop login screen.
//!
//! Opens the preferences database, wires the backend client into the login
//! window and runs it until the window is closed.

// Hide console window on Windows (logs go to file instead)
#![cfg_attr(windows, windows_subsystem = "windows")]

mod cli;

use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;
use portico_storage::Database;
use portico_ui::run_login;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Args;

/// Get the logs directory path.
fn logs_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "portico", "portico").map(|dirs| dirs.data_dir().join("logs"))
}

/// Initialize logging with file rotation.
fn init_logging(args: &Args) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("portico={},warn", log_level)));

    if let Some(log_dir) = logs_dir() {
        if std::fs::create_dir_all(&log_dir).is_ok() {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(5)
                .filename_prefix("portico")
                .filename_suffix("log")
                .build(&log_dir)
                .ok();

            if let Some(appender) = file_appender {
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);

                if args.debug {
                    tracing_subscriber::registry()
                        .with(env_filter)
                        .with(fmt::layer().with_writer(std::io::stdout))
                        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                        .init();
                } else {
                    tracing_subscriber::registry()
                        .with(env_filter)
                        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                        .init();
                }

                tracing::info!("Logging to {:?}", log_dir);
                return Some(guard);
            }
        }
    }

    // Fallback: console logging only
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::warn!("File logging unavailable, using console only");
    None
}

fn open_database(args: &Args) -> anyhow::Result<Database> {
    let db = match &args.database {
        Some(path) => Database::with_path(path.clone()),
        None => Database::new(),
    }
    .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match &args.database {
        Some(path) => tracing::info!("Database opened at {:?}", path),
        None => tracing::info!("Database opened at {:?}", Database::default_db_path()?),
    }
    Ok(db)
}

// The desktop launcher owns its async runtime, so main stays synchronous.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Keep guard alive for the duration of the program
    let _log_guard = init_logging(&args);

    tracing::info!("Starting Portico...");
    tracing::debug!("Args: {:?}", args);

    let db = open_database(&args)?;
    let config = args.login_config();

    run_login(config, db).map_err(|e| anyhow::anyhow!("UI error: {}", e))?;

    tracing::info!("Portico shutting down");
    Ok(())
}
