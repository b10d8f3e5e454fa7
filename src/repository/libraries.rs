//! Libraries repository

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::AppResult,
    models::library::{CreateLibrary, Library},
};

#[derive(Clone)]
pub struct LibrariesRepository {
    pool: Pool<Postgres>,
}

impl LibrariesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all libraries
    pub async fn find_all(&self) -> AppResult<Vec<Library>> {
        let rows = sqlx::query_as::<_, Library>("SELECT * FROM libraries ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a library by ID on an open transaction (used to resolve the
    /// denormalized library name during book writes)
    pub async fn fetch(&self, conn: &mut PgConnection, id: i32) -> AppResult<Option<Library>> {
        let row = sqlx::query_as::<_, Library>("SELECT * FROM libraries WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Create a library
    pub async fn insert(&self, data: &CreateLibrary) -> AppResult<Library> {
        let row = sqlx::query_as::<_, Library>(
            "INSERT INTO libraries (library_name) VALUES ($1) RETURNING *",
        )
        .bind(&data.library_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
