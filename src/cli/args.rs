//! CLI argument definitions using clap
//!
//! Commands:
//! - inventory-api init --config <path>
//! - inventory-api serve --config <path> [--port <port>] [--database <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inventory API - articles and categories over HTTP/JSON
#[derive(Parser, Debug)]
#[command(name = "inventory-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database file and schema, then exit
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./inventory.json")]
        config: PathBuf,

        /// Database file, overrides `database_path` from the config
        #[arg(long)]
        database: Option<PathBuf>,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./inventory.json")]
        config: PathBuf,

        /// Port to listen on, overrides `server.port` from the config
        #[arg(long)]
        port: Option<u16>,

        /// Database file, overrides `database_path` from the config
        #[arg(long)]
        database: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "inventory-api",
            "serve",
            "--port",
            "8080",
            "--database",
            "/tmp/inv.sqlite",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                config,
                port,
                database,
            } => {
                assert_eq!(config, PathBuf::from("./inventory.json"));
                assert_eq!(port, Some(8080));
                assert_eq!(database, Some(PathBuf::from("/tmp/inv.sqlite")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["inventory-api"]).is_err());
    }
}
