//! CLI argument definitions using clap
//!
//! Commands:
//! - bookstore serve [--config <path>] [--port <port>] [--database <path>]
//! - bookstore init [--config <path>] [--database <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bookstore - an HTTP API for managing books
#[derive(Parser, Debug)]
#[command(name = "bookstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database and books table, then exit
    Init {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// SQLite database file (overrides config)
        #[arg(long)]
        database: Option<PathBuf>,
    },

    /// Start the HTTP server
    Serve {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// SQLite database file (overrides config)
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
