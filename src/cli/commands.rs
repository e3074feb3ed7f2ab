//! CLI command implementations

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use crate::http_server::HttpServer;
use crate::store::Store;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    init_logging();

    match cmd {
        Command::Init { config, database } => init(&config, database),
        Command::Serve {
            config,
            port,
            database,
        } => serve(&config, port, database),
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the `info` default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Create the database file and schema
pub fn init(config_path: &Path, database: Option<PathBuf>) -> CliResult<()> {
    let config = Config::load(config_path)?.with_overrides(None, database)?;

    runtime()?.block_on(async {
        Store::open(&config.database_path).await?;
        tracing::info!(path = %config.database_path.display(), "database initialized");
        Ok::<(), CliError>(())
    })
}

/// Open the store and serve HTTP until the process is stopped
pub fn serve(config_path: &Path, port: Option<u16>, database: Option<PathBuf>) -> CliResult<()> {
    let config = Config::load(config_path)?.with_overrides(port, database)?;

    runtime()?.block_on(async {
        let store = Store::open(&config.database_path).await?;
        tracing::info!(path = %config.database_path.display(), "database opened");

        HttpServer::with_config(config.server.clone(), store)
            .start()
            .await?;
        Ok::<(), CliError>(())
    })
}
