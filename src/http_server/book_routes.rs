//! Book HTTP Routes
//!
//! CRUD endpoints under `/api/v1/books`.
//!
//! Store calls are synchronous, so each handler runs its service call on the
//! blocking thread pool.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Json, Path, State,
    },
    http::StatusCode,
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::books::{Book, BookPayload, BookResult, BookService};

use super::errors::{ApiError, ApiResult};

/// Shared book state
pub struct BooksState {
    pub service: BookService,
}

impl BooksState {
    pub fn new(service: BookService) -> Self {
        Self { service }
    }
}

/// Book routes with shared state
pub fn book_routes(state: Arc<BooksState>) -> Router {
    Router::new()
        .route("/api/v1/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/api/v1/books/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(state)
}

/// Run a service call off the async workers
async fn run_blocking<T, F>(state: &BooksState, call: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&BookService) -> BookResult<T> + Send + 'static,
{
    let service = state.service.clone();
    tokio::task::spawn_blocking(move || call(&service))
        .await
        .map_err(|err| ApiError::Internal(format!("Task failed: {}", err)))?
        .map_err(ApiError::from)
}

/// A non-integer id cannot match any row
fn book_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    path.map(|Path(id)| id).map_err(|_| ApiError::NotFound)
}

// ==================
// Handlers
// ==================

async fn list_books_handler(State(state): State<Arc<BooksState>>) -> ApiResult<Json<Vec<Book>>> {
    let books = run_blocking(&state, |service| service.list()).await?;
    Ok(Json(books))
}

async fn get_book_handler(
    State(state): State<Arc<BooksState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Book>> {
    let id = book_id(path)?;
    let book = run_blocking(&state, move |service| service.get(id)).await?;
    Ok(Json(book))
}

async fn create_book_handler(
    State(state): State<Arc<BooksState>>,
    body: Result<Json<BookPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let Json(payload) = body?;
    let book = run_blocking(&state, move |service| service.create(payload)).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn update_book_handler(
    State(state): State<Arc<BooksState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<BookPayload>, JsonRejection>,
) -> ApiResult<Json<Book>> {
    let Json(payload) = body?;
    let id = book_id(path)?;
    let book = run_blocking(&state, move |service| service.update(id, payload)).await?;
    Ok(Json(book))
}

async fn delete_book_handler(
    State(state): State<Arc<BooksState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = book_id(path)?;
    run_blocking(&state, move |service| service.delete(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
