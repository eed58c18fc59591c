//! # Book Errors
//!
//! Domain errors raised by the book store and service.

use thiserror::Error;

/// Result type for book operations
pub type BookResult<T> = Result<T, BookError>;

/// Book domain errors
#[derive(Debug, Error)]
pub enum BookError {
    /// A required field was empty or missing
    #[error("Title and author are required")]
    Validation,

    /// No row matches the requested id
    #[error("Book not found")]
    NotFound,

    /// Underlying SQLite failure
    #[error("Database error: {0}")]
    Store(#[from] rusqlite::Error),

    /// The shared connection lock was poisoned by a panicking holder
    #[error("Database error: connection lock poisoned")]
    LockPoisoned,

    /// Filesystem failure while preparing the database location
    #[error("Database error: {0}")]
    Io(#[from] std::io::Error),
}

impl BookError {
    /// Returns true for failures caused by the caller rather than the store
    pub fn is_client_error(&self) -> bool {
        matches!(self, BookError::Validation | BookError::NotFound)
    }
}
