//! # taskforge
//!
//! Task management API server binary — wires together config, database,
//! and the HTTP server.

#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use taskforge_server::{ApiServer, AppConfig};
use taskforge_store::{ConnectionConfig, new_file, run_migrations};

/// Task management API server.
#[derive(Parser, Debug)]
#[command(name = "taskforge", about = "Task management API server")]
struct Cli {
    /// Host to bind (overrides `TASKFORGE_HOST`).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, 0 for auto-assign (overrides `TASKFORGE_PORT`).
    #[arg(long)]
    port: Option<u16>,

    /// Path to the `SQLite` database (overrides `TASKFORGE_DB_PATH`).
    #[arg(long)]
    db_path: Option<PathBuf>,
}

fn default_db_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".taskforge").join("taskforge.db")
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();
    let mut config = AppConfig::load();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(path) = args.db_path {
        config.db_path = Some(path.to_string_lossy().into_owned());
    }

    if config.uses_dev_secret() {
        tracing::warn!(
            "using the built-in development secret — set TASKFORGE_SECRET_KEY in production"
        );
    }

    let db_path = config
        .db_path
        .clone()
        .map_or_else(default_db_path, PathBuf::from);
    ensure_parent_dir(&db_path)?;
    let db_str = db_path.to_string_lossy();
    let pool = new_file(&db_str, &ConnectionConfig::default())
        .context("Failed to open database")?;
    {
        let conn = pool.get().context("Failed to get DB connection")?;
        let applied = run_migrations(&conn).context("Failed to run migrations")?;
        tracing::info!(path = %db_path.display(), applied, "database ready");
    }

    let server = ApiServer::new(config, pool);
    let addr = format!("{}:{}", server.config().host, server.config().port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    let local_addr = listener.local_addr().context("Failed to read bound address")?;
    tracing::info!("taskforge listening on http://{local_addr}");

    axum::serve(listener, server.router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_none() {
        let cli = Cli::parse_from(["taskforge"]);
        assert_eq!(cli.host, None);
        assert_eq!(cli.port, None);
        assert_eq!(cli.db_path, None);
    }

    #[test]
    fn cli_custom_port() {
        let cli = Cli::parse_from(["taskforge", "--port", "8080"]);
        assert_eq!(cli.port, Some(8080));
    }

    #[test]
    fn cli_db_path() {
        let cli = Cli::parse_from(["taskforge", "--db-path", "/tmp/test.db"]);
        assert_eq!(cli.db_path, Some(PathBuf::from("/tmp/test.db")));
    }

    #[test]
    fn default_db_path_under_taskforge_dir() {
        let path = default_db_path();
        assert!(path.to_string_lossy().contains(".taskforge"));
        assert!(path.to_string_lossy().ends_with("taskforge.db"));
    }

    #[test]
    fn ensure_parent_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("test.db");
        ensure_parent_dir(&path).unwrap();
        assert!(path.parent().unwrap().exists());
    }
}
