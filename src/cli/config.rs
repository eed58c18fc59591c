//! Configuration file structure
//!
//! JSON file; every field is optional and falls back to its default.
//! Command line flags are applied on top by the commands.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogLevel;

use super::errors::{CliError, CliResult};

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file (default "bookstore.db")
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Log level (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// HTTP server settings
    #[serde(default)]
    pub server: HttpServerConfig,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("bookstore.db")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            log_level: default_log_level(),
            server: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command line overrides and re-validate
    pub fn with_overrides(mut self, port: Option<u16>, database: Option<PathBuf>) -> CliResult<Self> {
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(database) = database {
            self.database_path = database;
        }
        self.validate()?;
        Ok(self)
    }

    /// Parsed log level
    pub fn log_level(&self) -> CliResult<LogLevel> {
        LogLevel::parse(&self.log_level).map_err(CliError::from)
    }

    fn validate(&self) -> CliResult<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(CliError::config_error("database_path must not be empty"));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        self.log_level()?;

        Ok(())
    }
}
