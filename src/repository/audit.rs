//! Audit entries repository

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::AppResult,
    models::audit::{AuditEntry, NewAuditEntry},
};

#[derive(Clone)]
pub struct AuditRepository {
    pool: Pool<Postgres>,
}

impl AuditRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert an audit entry on an open transaction. Entries are never
    /// updated or deleted afterwards.
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        entry: &NewAuditEntry,
    ) -> AppResult<AuditEntry> {
        let row = sqlx::query_as::<_, AuditEntry>(
            r#"
            INSERT INTO audit_entries
                (book_id, title, create_date, last_modified, modified_by, action_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(entry.book_id)
        .bind(&entry.title)
        .bind(entry.create_date)
        .bind(entry.last_modified)
        .bind(&entry.modified_by)
        .bind(&entry.action_type)
        .fetch_one(&mut *conn)
        .await?;
        Ok(row)
    }

    /// List all audit entries for a book, ordered by creation time
    /// ascending (id breaks ties for entries sharing a timestamp)
    pub async fn find_by_book_id(&self, book_id: i32) -> AppResult<Vec<AuditEntry>> {
        let rows = sqlx::query_as::<_, AuditEntry>(
            "SELECT * FROM audit_entries WHERE book_id = $1 ORDER BY create_date, id",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
