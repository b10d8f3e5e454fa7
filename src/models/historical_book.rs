//! Historical book snapshot model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Point-in-time snapshot of a book, created only through the explicit
/// snapshot endpoint, never automatically on mutation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct HistoricalBook {
    pub id: i64,
    pub book_id: i32,
    pub title: String,
    pub author_id: Option<i32>,
    pub publisher_name: Option<String>,
    pub created_at: DateTime<Utc>,
}
