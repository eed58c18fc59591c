//! # Books
//!
//! The book resource: model, SQLite store and CRUD service.

pub mod errors;
pub mod model;
pub mod service;
pub mod store;

pub use errors::{BookError, BookResult};
pub use model::{Book, BookDraft, BookPayload};
pub use service::{BookService, BookStoreArc};
pub use store::{BookStore, SqliteBookStore};
