//! Book Store Invariant Tests
//!
//! Service-level properties over an on-disk database:
//! - Create then get returns the input plus the assigned id
//! - Rejected creates never write
//! - ids are unique and never reused
//! - Data survives reopening the file

use std::sync::Arc;

use bookstore::books::{BookError, BookPayload, BookService, BookStore, SqliteBookStore};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_service() -> (TempDir, BookService) {
    let tmp = TempDir::new().unwrap();
    let store = SqliteBookStore::open(tmp.path().join("books.db")).unwrap();
    (tmp, BookService::new(Arc::new(store)))
}

fn sample_payloads() -> Vec<BookPayload> {
    vec![
        BookPayload::new("Dune", "Frank Herbert", Some(1965)),
        BookPayload::new("Emma", "Jane Austen", None),
        BookPayload::new("Ficciones", "Jorge Luis Borges", Some(1944)),
        BookPayload::new("Солярис", "Станислав Лем", Some(1961)),
    ]
}

// =============================================================================
// Create / Get
// =============================================================================

/// Every valid payload reads back unchanged apart from the id.
#[test]
fn test_create_then_get_matches_input() {
    let (_tmp, service) = setup_service();

    for payload in sample_payloads() {
        let expected = payload.clone().validate().unwrap();
        let created = service.create(payload).unwrap();
        let fetched = service.get(created.id).unwrap();

        assert_eq!(fetched.title, expected.title);
        assert_eq!(fetched.author, expected.author);
        assert_eq!(fetched.published_year, expected.published_year);
    }
}

/// Validation failures leave the table untouched.
#[test]
fn test_invalid_create_does_not_change_count() {
    let (_tmp, service) = setup_service();
    service.create(BookPayload::new("Dune", "Herbert", None)).unwrap();

    let invalid = [
        BookPayload::new("", "Herbert", None),
        BookPayload::new("Dune", "", None),
        BookPayload::default(),
    ];
    for payload in invalid {
        assert!(matches!(service.create(payload), Err(BookError::Validation)));
    }

    assert_eq!(service.list().unwrap().len(), 1);
}

// =============================================================================
// List
// =============================================================================

/// List mirrors exactly what is stored, in insertion order, without duplicates.
#[test]
fn test_list_reflects_creates_and_deletes() {
    let (_tmp, service) = setup_service();

    let ids: Vec<i64> = sample_payloads()
        .into_iter()
        .map(|payload| service.create(payload).unwrap().id)
        .collect();

    service.delete(ids[1]).unwrap();

    let listed: Vec<i64> = service.list().unwrap().iter().map(|book| book.id).collect();
    assert_eq!(listed, vec![ids[0], ids[2], ids[3]]);
}

// =============================================================================
// Update / Delete
// =============================================================================

/// Updating an absent id changes nothing.
#[test]
fn test_update_absent_mutates_nothing() {
    let (_tmp, service) = setup_service();
    let created = service.create(BookPayload::new("Dune", "Herbert", None)).unwrap();

    let result = service.update(created.id + 100, BookPayload::new("X", "Y", None));
    assert!(matches!(result, Err(BookError::NotFound)));
    assert_eq!(service.list().unwrap(), vec![created]);
}

/// A deleted id is gone and stays gone.
#[test]
fn test_delete_is_final_and_ids_not_reused() {
    let (_tmp, service) = setup_service();
    let first = service.create(BookPayload::new("Dune", "Herbert", None)).unwrap();

    service.delete(first.id).unwrap();
    assert!(matches!(service.get(first.id), Err(BookError::NotFound)));
    assert!(matches!(service.delete(first.id), Err(BookError::NotFound)));

    let second = service.create(BookPayload::new("Emma", "Austen", None)).unwrap();
    assert_ne!(second.id, first.id);
}

// =============================================================================
// Persistence
// =============================================================================

/// Books written through one handle are visible after reopening the file.
#[test]
fn test_reopen_preserves_rows() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("books.db");

    {
        let store = SqliteBookStore::open(&path).unwrap();
        let service = BookService::new(Arc::new(store));
        for payload in sample_payloads() {
            service.create(payload).unwrap();
        }
    }

    let store = SqliteBookStore::open(&path).unwrap();
    assert_eq!(store.list().unwrap().len(), 4);
}

/// Concurrent creates through cloned handles all land with distinct ids.
#[test]
fn test_concurrent_creates_get_distinct_ids() {
    let (_tmp, service) = setup_service();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = service.clone();
            std::thread::spawn(move || {
                service
                    .create(BookPayload::new(format!("Book {}", i), "Author", None))
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}
