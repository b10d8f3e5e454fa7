//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{audit, authors, books, health, libraries};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "0.1.0",
        description = "Book Catalog Service REST API",
        license(name = "MIT")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::delete_all_books,
        books::add_publisher,
        books::list_snapshots,
        books::create_snapshot,
        // Libraries
        libraries::list_libraries,
        libraries::create_library,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::author_books,
        // Audit
        audit::get_audit_history,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::Publisher,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::historical_book::HistoricalBook,
            books::BackfillResponse,
            // Libraries
            crate::models::library::Library,
            crate::models::library::CreateLibrary,
            // Authors
            crate::models::author::Author,
            crate::models::author::CreateAuthor,
            // Audit
            crate::models::audit::AuditEntry,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "libraries", description = "Library management"),
        (name = "authors", description = "Author management"),
        (name = "audit", description = "Book audit trail")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
