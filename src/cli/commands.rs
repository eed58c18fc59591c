//! CLI command implementations
//!
//! `serve` boots logging, opens the store and runs the HTTP server.
//! `init` only prepares the database file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::books::{BookService, SqliteBookStore};
use crate::http_server::HttpServer;
use crate::observability::init_tracing;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config, database } => init(config.as_deref(), database),
        Command::Serve {
            config,
            port,
            database,
        } => serve(config.as_deref(), port, database),
    }
}

/// Create the database file and books table
pub fn init(config_path: Option<&Path>, database: Option<PathBuf>) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?.with_overrides(None, database)?;

    SqliteBookStore::open(&config.database_path)?;
    println!("Initialized database at {}", config.database_path.display());

    Ok(())
}

/// Start the HTTP server
///
/// 1. Load config and apply overrides
/// 2. Install logging
/// 3. Open the store (creates the table if absent)
/// 4. Serve until Ctrl-C
pub fn serve(
    config_path: Option<&Path>,
    port: Option<u16>,
    database: Option<PathBuf>,
) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?.with_overrides(port, database)?;

    init_tracing(config.log_level()?)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        database = %config.database_path.display(),
        "starting bookstore"
    );

    let store = SqliteBookStore::open(&config.database_path)?;
    let service = BookService::new(Arc::new(store));
    let server = HttpServer::new(config.server, service);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}
