//! Books API endpoints
//!
//! Every endpoint answers with the service envelope: 200 when it reports
//! success, 404 when it reports a failure. Requests that cannot be decoded
//! are rejected with 400 and an [`ErrorDetail`](crate::error::ErrorDetail) body.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{ApiResponse, Book, BookIdQuery, BookInput},
    AppState,
};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Book list", body = BookListResponse),
        (status = 404, description = "No book stored", body = BookListResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> ApiResponse<Vec<Book>> {
    state.services.books.list().await
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = Uuid, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = BookResponse),
        (status = 400, description = "Malformed ID", body = ErrorDetail)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, AppError>,
) -> ApiResponse<Book> {
    state.services.books.get_by_id(id).await
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 200, description = "Book created, payload is its ID", body = MessageResponse),
        (status = 404, description = "Invalid or duplicate book", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorDetail)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<Option<BookInput>>, AppError>,
) -> ApiResponse<String> {
    state.services.books.create(data).await
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse),
        (status = 400, description = "Missing or malformed ID", body = ErrorDetail)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<BookIdQuery>, AppError>,
) -> ApiResponse<String> {
    state.services.books.delete(query.id).await
}

/// Update an existing book
#[utoipa::path(
    patch,
    path = "/books",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 404, description = "Book not found or invalid", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorDetail)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<Option<BookInput>>, AppError>,
) -> ApiResponse<String> {
    state.services.books.update(data).await
}

/// Update a book, or create it when its ID is unknown
#[utoipa::path(
    put,
    path = "/books",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 200, description = "Book saved", body = MessageResponse),
        (status = 404, description = "Invalid book", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorDetail)
    )
)]
pub async fn save_book(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<Option<BookInput>>, AppError>,
) -> ApiResponse<String> {
    state.services.books.save(data).await
}
