//! Book API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        book::{Book, CreateBook, UpdateBook},
        historical_book::HistoricalBook,
    },
};

/// Confirmation body for the publisher backfill
#[derive(Serialize, ToSchema)]
pub struct BackfillResponse {
    pub message: String,
    /// Number of books that received the default publisher
    pub updated: u64,
}

/// List all books. An empty catalog yields 204 rather than an empty
/// 200 body.
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Book list", body = Vec<Book>),
        (status = 204, description = "No books found")
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Response> {
    let books = state.services.books.list().await?;
    if books.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(books).into_response())
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Create a book. Library and publisher are mandatory.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Missing library or publisher", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create(&data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update a book by ID
#[utoipa::path(
    put,
    path = "/book/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update_by_id(id, &data).await?;
    Ok(Json(book))
}

/// Delete a book by ID
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.books.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every book, auditing each one
#[utoipa::path(
    delete,
    path = "/books",
    tag = "books",
    responses(
        (status = 204, description = "All books deleted")
    )
)]
pub async fn delete_all_books(State(state): State<crate::AppState>) -> AppResult<StatusCode> {
    state.services.books.delete_all().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Backfill the default publisher onto books missing one
#[utoipa::path(
    post,
    path = "/books/add-publisher",
    tag = "books",
    responses(
        (status = 200, description = "Backfill completed", body = BackfillResponse)
    )
)]
pub async fn add_publisher(
    State(state): State<crate::AppState>,
) -> AppResult<Json<BackfillResponse>> {
    let updated = state.services.books.add_publisher_to_existing_books().await?;
    Ok(Json(BackfillResponse {
        message: "Publisher 'XYZ' added to existing books".to_string(),
        updated,
    }))
}

/// List historical snapshots of a book
#[utoipa::path(
    get,
    path = "/books/{id}/history",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Snapshot list", body = Vec<HistoricalBook>)
    )
)]
pub async fn list_snapshots(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<HistoricalBook>>> {
    let snapshots = state.services.books.list_snapshots(id).await?;
    Ok(Json(snapshots))
}

/// Snapshot the current state of a book into the history table
#[utoipa::path(
    post,
    path = "/books/{id}/history",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 201, description = "Snapshot created", body = HistoricalBook),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_snapshot(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<(StatusCode, Json<HistoricalBook>)> {
    let snapshot = state.services.books.save_snapshot(id).await?;
    Ok((StatusCode::CREATED, Json(snapshot)))
}
