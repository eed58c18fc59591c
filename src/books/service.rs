//! # Book Service
//!
//! The five CRUD operations over a [`BookStore`]. Each call issues a single
//! statement; validation failures never reach the store.

use std::sync::Arc;

use tracing::debug;

use super::errors::{BookError, BookResult};
use super::model::{Book, BookPayload};
use super::store::BookStore;

/// Shared handle to any book store implementation
pub type BookStoreArc = Arc<dyn BookStore>;

/// Stateless book operations over an injected store
#[derive(Clone)]
pub struct BookService {
    store: BookStoreArc,
}

impl BookService {
    pub fn new(store: BookStoreArc) -> Self {
        Self { store }
    }

    /// All books in insertion order
    pub fn list(&self) -> BookResult<Vec<Book>> {
        self.store.list()
    }

    pub fn get(&self, id: i64) -> BookResult<Book> {
        self.store.get(id)?.ok_or(BookError::NotFound)
    }

    /// Validate and insert; the returned book carries the assigned id
    pub fn create(&self, payload: BookPayload) -> BookResult<Book> {
        let draft = payload.validate()?;
        let id = self.store.insert(&draft)?;
        debug!(book_id = id, "book created");
        Ok(draft.into_book(id))
    }

    /// Replace all mutable fields of `id`.
    ///
    /// The returned book takes its id from the argument, not the body.
    pub fn update(&self, id: i64, payload: BookPayload) -> BookResult<Book> {
        let draft = payload.validate()?;
        if self.store.update(id, &draft)? == 0 {
            return Err(BookError::NotFound);
        }
        debug!(book_id = id, "book updated");
        Ok(draft.into_book(id))
    }

    pub fn delete(&self, id: i64) -> BookResult<()> {
        if self.store.delete(id)? == 0 {
            return Err(BookError::NotFound);
        }
        debug!(book_id = id, "book deleted");
        Ok(())
    }
}
