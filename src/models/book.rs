//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use utoipa::ToSchema;

/// Publisher value object embedded in a book (stored as a denormalized
/// `publisher_name` column, no table of its own)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Publisher {
    pub name: String,
}

/// Default publisher assigned by the backfill operation
pub const DEFAULT_PUBLISHER_NAME: &str = "XYZ";

/// Full book record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub create_date: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub author_id: Option<i32>,
    pub publisher: Option<Publisher>,
    pub library_id: Option<i32>,
    /// Library name copied from the referenced library at write time
    pub library_name: Option<String>,
}

impl<'r> FromRow<'r, PgRow> for Book {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            create_date: row.try_get("create_date")?,
            last_modified: row.try_get("last_modified")?,
            author_id: row.try_get("author_id")?,
            publisher: row
                .try_get::<Option<String>, _>("publisher_name")?
                .map(|name| Publisher { name }),
            library_id: row.try_get("library_id")?,
            library_name: row.try_get("library_name")?,
        })
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author_id: Option<i32>,
    pub publisher: Option<Publisher>,
    pub library_id: Option<i32>,
}

/// Update book request; fields are copied onto the stored record as-is
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: String,
    pub author_id: Option<i32>,
    pub publisher: Option<Publisher>,
    pub library_id: Option<i32>,
}
