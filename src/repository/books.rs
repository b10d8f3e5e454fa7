//! Books repository

use chrono::Utc;
use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook, DEFAULT_PUBLISHER_NAME},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books
    pub async fn find_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a book by ID
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Check whether a book exists
    pub async fn exists_by_id(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// List all books owned by an author (derived back-collection)
    pub async fn find_by_author(&self, author_id: i32) -> AppResult<Vec<Book>> {
        let rows =
            sqlx::query_as::<_, Book>("SELECT * FROM books WHERE author_id = $1 ORDER BY id")
                .bind(author_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    /// Get a book by ID on an open transaction
    pub async fn fetch(&self, conn: &mut PgConnection, id: i32) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// List all books on an open transaction
    pub async fn fetch_all(&self, conn: &mut PgConnection) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Insert a book; `library_name` is the denormalized copy resolved
    /// from the referenced library by the caller
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        data: &CreateBook,
        library_name: Option<&str>,
    ) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author_id, publisher_name, library_id, library_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(data.author_id)
        .bind(data.publisher.as_ref().map(|p| p.name.as_str()))
        .bind(data.library_id)
        .bind(library_name)
        .fetch_one(&mut *conn)
        .await?;
        Ok(row)
    }

    /// Overwrite a book's mutable fields and refresh `last_modified`
    pub async fn update(
        &self,
        conn: &mut PgConnection,
        id: i32,
        data: &UpdateBook,
        library_name: Option<&str>,
    ) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, author_id = $2, publisher_name = $3,
                library_id = $4, library_name = $5, last_modified = $6
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(data.author_id)
        .bind(data.publisher.as_ref().map(|p| p.name.as_str()))
        .bind(data.library_id)
        .bind(library_name)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(row)
    }

    /// Delete a book, returning the number of rows removed
    pub async fn delete_by_id(&self, conn: &mut PgConnection, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every book
    pub async fn delete_all(&self, conn: &mut PgConnection) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM books")
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Assign the default publisher to every book missing one.
    /// Idempotent: books with a publisher are left untouched.
    pub async fn backfill_publisher(&self, conn: &mut PgConnection) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE books SET publisher_name = $1 WHERE publisher_name IS NULL",
        )
        .bind(DEFAULT_PUBLISHER_NAME)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected())
    }
}
