//! Observability for the bookstore service
//!
//! Structured logging through `tracing`. HTTP request spans come from
//! `tower_http::trace::TraceLayer` in the server.

mod logger;

pub use logger::{init_tracing, LogLevel, ObservabilityError};
