//! Audit history API endpoint

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::audit::AuditEntry};

/// Audit history for a book, ordered by creation time ascending.
/// Succeeds for any integer id; unknown ids yield an empty list.
#[utoipa::path(
    get,
    path = "/{book_id}/audit-history",
    tag = "audit",
    params(("book_id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Ordered audit history", body = Vec<AuditEntry>)
    )
)]
pub async fn get_audit_history(
    State(state): State<crate::AppState>,
    Path(book_id): Path<i32>,
) -> AppResult<Json<Vec<AuditEntry>>> {
    let history = state.services.audit.history(book_id).await?;
    Ok(Json(history))
}
