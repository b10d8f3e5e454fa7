//! Repository layer for database operations

pub mod audit;
pub mod authors;
pub mod books;
pub mod historical_books;
pub mod libraries;

use sqlx::{Pool, Postgres};

/// Main repository struct holding the database connection pool.
///
/// Constructed once at startup and passed by handle into the services;
/// the pool is public so services can open transactions spanning
/// several sub-repository calls.
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: books::BooksRepository,
    pub authors: authors::AuthorsRepository,
    pub libraries: libraries::LibrariesRepository,
    pub audit: audit::AuditRepository,
    pub historical_books: historical_books::HistoricalBooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            authors: authors::AuthorsRepository::new(pool.clone()),
            libraries: libraries::LibrariesRepository::new(pool.clone()),
            audit: audit::AuditRepository::new(pool.clone()),
            historical_books: historical_books::HistoricalBooksRepository::new(pool.clone()),
            pool,
        }
    }
}
