//! Tracing subscriber bootstrap
//!
//! - One global subscriber per process
//! - `RUST_LOG` overrides the configured level
//! - Initialization never panics

use std::fmt;

use tracing_subscriber::EnvFilter;

/// Log severity accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name, case-insensitively
    pub fn parse(level: &str) -> Result<Self, ObservabilityError> {
        match level.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(ObservabilityError::UnknownLevel(other.to_string())),
        }
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Observability errors
#[derive(Debug, thiserror::Error)]
pub enum ObservabilityError {
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    UnknownLevel(String),

    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Install the global fmt subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(level: LogLevel) -> Result<(), ObservabilityError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bookstore={level},tower_http={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|err| ObservabilityError::Install(err.to_string()))
}
