//! Authors service

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, CreateAuthor},
        book::Book,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all authors
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.find_all().await
    }

    /// Get an author by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Author> {
        self.repository
            .authors
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Create an author
    pub async fn create(&self, data: &CreateAuthor) -> AppResult<Author> {
        if data.first_name.trim().is_empty() || data.last_name.trim().is_empty() {
            return Err(AppError::Validation(
                "Author first and last name cannot be empty".to_string(),
            ));
        }
        self.repository.authors.insert(data).await
    }

    /// Books owned by an author: the back-collection is derived on
    /// demand rather than stored
    pub async fn books(&self, author_id: i32) -> AppResult<Vec<Book>> {
        // Existence check first so an unknown author reads as 404, not
        // as an author with no books
        self.get_by_id(author_id).await?;
        self.repository.books.find_by_author(author_id).await
    }
}
