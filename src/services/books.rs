//! Book domain service

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, CreateBook, UpdateBook},
        historical_book::HistoricalBook,
        library::{CreateLibrary, Library},
    },
    repository::Repository,
};

use super::audit::{AuditService, ACTION_CREATE, ACTION_DELETE, ACTION_UPDATE, SYSTEM_ACTOR};

#[derive(Clone)]
pub struct BookService {
    repository: Repository,
    audit: AuditService,
}

impl BookService {
    pub fn new(repository: Repository, audit: AuditService) -> Self {
        Self { repository, audit }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.find_all().await
    }

    /// Get a book by ID. No pre-validation of the id; the gateway is
    /// simply asked and an absent row maps to not-found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository
            .books
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Create a book and its "Create" audit entry in one transaction.
    ///
    /// Library and publisher are mandatory at creation time; a violation
    /// rejects the request before anything is persisted.
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let library_id = validate_new_book(data)?;

        if let Some(author_id) = data.author_id {
            if !self.repository.authors.exists_by_id(author_id).await? {
                return Err(AppError::Validation(format!(
                    "Author {} not found",
                    author_id
                )));
            }
        }

        let mut tx = self.repository.pool.begin().await?;

        let library = self
            .repository
            .libraries
            .fetch(&mut tx, library_id)
            .await?
            .ok_or_else(|| AppError::Validation(format!("Library {} not found", library_id)))?;

        let book = self
            .repository
            .books
            .insert(&mut tx, data, Some(library.library_name.as_str()))
            .await?;
        self.audit
            .record(&mut tx, &book, SYSTEM_ACTOR, ACTION_CREATE)
            .await?;

        tx.commit().await?;

        tracing::info!(book_id = book.id, title = %book.title, "Book created");
        Ok(book)
    }

    /// Copy the incoming fields onto an existing book, refresh its
    /// last-modified timestamp and record an "Update" audit entry, all
    /// in one transaction.
    pub async fn update_by_id(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
        let mut tx = self.repository.pool.begin().await?;

        // Absent id reads as not-found before any payload validation
        if self.repository.books.fetch(&mut tx, id).await?.is_none() {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        if let Some(author_id) = data.author_id {
            if !self.repository.authors.exists_by_id(author_id).await? {
                return Err(AppError::Validation(format!(
                    "Author {} not found",
                    author_id
                )));
            }
        }

        let library_name = match data.library_id {
            Some(library_id) => {
                let library = self
                    .repository
                    .libraries
                    .fetch(&mut tx, library_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::Validation(format!("Library {} not found", library_id))
                    })?;
                Some(library.library_name)
            }
            None => None,
        };

        let updated = self
            .repository
            .books
            .update(&mut tx, id, data, library_name.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        self.audit
            .record(&mut tx, &updated, SYSTEM_ACTOR, ACTION_UPDATE)
            .await?;

        tx.commit().await?;

        tracing::info!(book_id = id, "Book updated");
        Ok(updated)
    }

    /// Delete a book, recording a "Delete" audit entry from the
    /// pre-deletion state. Audit-then-delete: the entry must snapshot
    /// the row while it still exists.
    pub async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let mut tx = self.repository.pool.begin().await?;

        let book = self
            .repository
            .books
            .fetch(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        self.audit
            .record(&mut tx, &book, SYSTEM_ACTOR, ACTION_DELETE)
            .await?;
        self.repository.books.delete_by_id(&mut tx, id).await?;

        tx.commit().await?;

        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }

    /// Delete every book, recording a "Delete" audit entry per book.
    /// Atomic: a failure anywhere rolls back both the audit rows and
    /// the deletes.
    pub async fn delete_all(&self) -> AppResult<u64> {
        let mut tx = self.repository.pool.begin().await?;

        let books = self.repository.books.fetch_all(&mut tx).await?;
        for book in &books {
            self.audit
                .record(&mut tx, book, SYSTEM_ACTOR, ACTION_DELETE)
                .await?;
        }
        let deleted = self.repository.books.delete_all(&mut tx).await?;

        tx.commit().await?;

        tracing::info!(deleted, "All books deleted");
        Ok(deleted)
    }

    /// Assign the default publisher to every book missing one.
    /// Idempotent; no audit entries are written for this bulk
    /// operation. Returns the number of books touched.
    pub async fn add_publisher_to_existing_books(&self) -> AppResult<u64> {
        let mut conn = self.repository.pool.acquire().await?;
        let updated = self.repository.books.backfill_publisher(&mut conn).await?;
        tracing::info!(updated, "Publisher backfill completed");
        Ok(updated)
    }

    /// List all libraries
    pub async fn list_libraries(&self) -> AppResult<Vec<Library>> {
        self.repository.libraries.find_all().await
    }

    /// Create a library
    pub async fn create_library(&self, data: &CreateLibrary) -> AppResult<Library> {
        if data.library_name.trim().is_empty() {
            return Err(AppError::Validation(
                "Library name cannot be empty".to_string(),
            ));
        }
        self.repository.libraries.insert(data).await
    }

    /// Explicitly snapshot the current state of a book into the history
    /// table. Never invoked implicitly by the mutation paths.
    pub async fn save_snapshot(&self, book_id: i32) -> AppResult<HistoricalBook> {
        let book = self.get_by_id(book_id).await?;
        self.repository.historical_books.insert_snapshot(&book).await
    }

    /// List all snapshots taken of a book, oldest first
    pub async fn list_snapshots(&self, book_id: i32) -> AppResult<Vec<HistoricalBook>> {
        self.repository.historical_books.find_by_book_id(book_id).await
    }
}

/// Creation precondition: library and publisher must both be present.
/// Returns the library id for the caller to resolve.
fn validate_new_book(data: &CreateBook) -> AppResult<i32> {
    let library_id = data
        .library_id
        .ok_or_else(|| AppError::Validation("Library is mandatory for book creation".to_string()))?;
    if data.publisher.is_none() {
        return Err(AppError::Validation(
            "Publisher is mandatory for book creation".to_string(),
        ));
    }
    Ok(library_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::Publisher;

    fn payload() -> CreateBook {
        CreateBook {
            title: "Dune".to_string(),
            author_id: None,
            publisher: Some(Publisher {
                name: "Chilton".to_string(),
            }),
            library_id: Some(3),
        }
    }

    #[test]
    fn valid_payload_yields_library_id() {
        assert_eq!(validate_new_book(&payload()).unwrap(), 3);
    }

    #[test]
    fn missing_library_is_rejected() {
        let mut data = payload();
        data.library_id = None;
        let err = validate_new_book(&data).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn missing_publisher_is_rejected() {
        let mut data = payload();
        data.publisher = None;
        let err = validate_new_book(&data).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
