//! Audit entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::book::Book;

/// Immutable record of one mutation event against a book.
///
/// `book_id` is a denormalized copy, not a foreign key: deleting a book
/// must leave its audit trail intact.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AuditEntry {
    pub id: i32,
    pub book_id: i32,
    pub title: String,
    pub create_date: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub modified_by: String,
    pub action_type: String,
}

/// Audit entry under construction, snapshotting a book before insert
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub book_id: i32,
    pub title: String,
    pub create_date: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub modified_by: String,
    pub action_type: String,
}

impl NewAuditEntry {
    /// Snapshot a book's current state together with the actor and action
    pub fn from_book(book: &Book, modified_by: &str, action_type: &str) -> Self {
        Self {
            book_id: book.id,
            title: book.title.clone(),
            create_date: book.create_date,
            last_modified: book.last_modified,
            modified_by: modified_by.to_string(),
            action_type: action_type.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::Publisher;

    fn sample_book() -> Book {
        Book {
            id: 42,
            title: "Dune".to_string(),
            create_date: Utc::now(),
            last_modified: Utc::now(),
            author_id: Some(7),
            publisher: Some(Publisher {
                name: "Chilton".to_string(),
            }),
            library_id: Some(1),
            library_name: Some("Central".to_string()),
        }
    }

    #[test]
    fn from_book_snapshots_identity_and_timestamps() {
        let book = sample_book();
        let entry = NewAuditEntry::from_book(&book, "system", "Create");

        assert_eq!(entry.book_id, 42);
        assert_eq!(entry.title, "Dune");
        assert_eq!(entry.create_date, book.create_date);
        assert_eq!(entry.last_modified, book.last_modified);
        assert_eq!(entry.modified_by, "system");
        assert_eq!(entry.action_type, "Create");
    }
}
