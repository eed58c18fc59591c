//! CLI module for the bookstore service
//!
//! Provides command-line interface for:
//! - init: Create the database and books table
//! - serve: Run the HTTP API

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
