//! Historical book snapshots repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{book::Book, historical_book::HistoricalBook},
};

#[derive(Clone)]
pub struct HistoricalBooksRepository {
    pool: Pool<Postgres>,
}

impl HistoricalBooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Snapshot the current state of a book into the history table
    pub async fn insert_snapshot(&self, book: &Book) -> AppResult<HistoricalBook> {
        let row = sqlx::query_as::<_, HistoricalBook>(
            r#"
            INSERT INTO historical_books (book_id, title, author_id, publisher_name, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(book.id)
        .bind(&book.title)
        .bind(book.author_id)
        .bind(book.publisher.as_ref().map(|p| p.name.as_str()))
        .bind(book.create_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// List all snapshots taken of a book, oldest first
    pub async fn find_by_book_id(&self, book_id: i32) -> AppResult<Vec<HistoricalBook>> {
        let rows = sqlx::query_as::<_, HistoricalBook>(
            "SELECT * FROM historical_books WHERE book_id = $1 ORDER BY id",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
