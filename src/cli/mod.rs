//! CLI module for the inventory API
//!
//! Provides command-line interface for:
//! - init: Create the database and schema
//! - serve: Boot the store and run the HTTP server

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
