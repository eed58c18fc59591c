//! bookstore - an HTTP API for managing books stored in SQLite

pub mod books;
pub mod cli;
pub mod http_server;
pub mod observability;
