//! # HTTP Server Module
//!
//! Axum server exposing the bookstore API.
//!
//! # Endpoints
//!
//! - `/`, `/health`, `/api/v1` - Health check
//! - `/api/v1/books` - List and create books
//! - `/api/v1/books/:id` - Get, update and delete a book

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
