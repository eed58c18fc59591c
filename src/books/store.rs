//! # Book Store
//!
//! SQLite persistence for the `books` table.
//!
//! The connection is shared behind a mutex and every method holds the lock
//! for exactly one statement. There is no cross-statement transaction, so
//! concurrent writers to the same row are last-writer-wins.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, error, info};

use super::errors::{BookError, BookResult};
use super::model::{Book, BookDraft};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    published_year INTEGER
)";

const BOOK_SELECT_SQL: &str = "SELECT id, title, author, published_year FROM books";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Persistence operations over the books table.
///
/// `update` and `delete` report the number of affected rows; callers decide
/// what zero means.
pub trait BookStore: Send + Sync {
    fn list(&self) -> BookResult<Vec<Book>>;
    fn get(&self, id: i64) -> BookResult<Option<Book>>;
    fn insert(&self, draft: &BookDraft) -> BookResult<i64>;
    fn update(&self, id: i64, draft: &BookDraft) -> BookResult<usize>;
    fn delete(&self, id: i64) -> BookResult<usize>;
}

/// SQLite-backed book store
#[derive(Clone)]
pub struct SqliteBookStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteBookStore {
    /// Open (or create) a database file and ensure the table exists.
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> BookResult<Self> {
        let path = path.as_ref();
        let started_at = Instant::now();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path).map_err(|err| {
            error!(path = %path.display(), error = %err, "failed to open database");
            BookError::from(err)
        })?;
        let store = Self::bootstrap(conn)?;

        info!(
            path = %path.display(),
            duration_ms = started_at.elapsed().as_millis() as u64,
            "database opened"
        );
        Ok(store)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> BookResult<Self> {
        let store = Self::bootstrap(Connection::open_in_memory()?)?;
        debug!("in-memory database opened");
        Ok(store)
    }

    fn bootstrap(conn: Connection) -> BookResult<Self> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute(CREATE_TABLE_SQL, [])?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> BookResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| BookError::LockPoisoned)
    }
}

impl BookStore for SqliteBookStore {
    fn list(&self) -> BookResult<Vec<Book>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{BOOK_SELECT_SQL} ORDER BY id ASC"))?;
        let books = stmt
            .query_map([], parse_book_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(books)
    }

    fn get(&self, id: i64) -> BookResult<Option<Book>> {
        let conn = self.lock()?;
        let book = conn
            .query_row(
                &format!("{BOOK_SELECT_SQL} WHERE id = ?1"),
                params![id],
                parse_book_row,
            )
            .optional()?;
        Ok(book)
    }

    fn insert(&self, draft: &BookDraft) -> BookResult<i64> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO books (title, author, published_year) VALUES (?1, ?2, ?3)",
            params![draft.title, draft.author, draft.published_year],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(&self, id: i64, draft: &BookDraft) -> BookResult<usize> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE books SET title = ?1, author = ?2, published_year = ?3 WHERE id = ?4",
            params![draft.title, draft.author, draft.published_year, id],
        )?;
        Ok(changed)
    }

    fn delete(&self, id: i64) -> BookResult<usize> {
        let conn = self.lock()?;
        let changed = conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
        Ok(changed)
    }
}

fn parse_book_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        published_year: row.get(3)?,
    })
}
