//! Business logic services

pub mod audit;
pub mod authors;
pub mod books;

use sqlx::{Pool, Postgres};

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BookService,
    pub authors: authors::AuthorsService,
    pub audit: audit::AuditService,
    pool: Pool<Postgres>,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        let audit = audit::AuditService::new(repository.clone());
        Self {
            books: books::BookService::new(repository.clone(), audit.clone()),
            authors: authors::AuthorsService::new(repository.clone()),
            audit,
            pool: repository.pool,
        }
    }

    /// Database pool handle, used by the readiness check
    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}
