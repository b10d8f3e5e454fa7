//! Library API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::AppResult,
    models::library::{CreateLibrary, Library},
};

/// List all libraries. An empty result yields 204.
#[utoipa::path(
    get,
    path = "/libraries",
    tag = "libraries",
    responses(
        (status = 200, description = "Library list", body = Vec<Library>),
        (status = 204, description = "No libraries found")
    )
)]
pub async fn list_libraries(State(state): State<crate::AppState>) -> AppResult<Response> {
    let libraries = state.services.books.list_libraries().await?;
    if libraries.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(libraries).into_response())
}

/// Create a library
#[utoipa::path(
    post,
    path = "/libraries",
    tag = "libraries",
    request_body = CreateLibrary,
    responses(
        (status = 201, description = "Library created", body = Library),
        (status = 400, description = "Empty library name", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_library(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateLibrary>,
) -> AppResult<(StatusCode, Json<Library>)> {
    let library = state.services.books.create_library(&data).await?;
    Ok((StatusCode::CREATED, Json(library)))
}
