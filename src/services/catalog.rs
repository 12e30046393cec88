//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book in the catalog
    pub fn list_books(&self) -> Vec<Book> {
        self.repository.books.list()
    }

    /// Get a book by ID
    pub fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get(id).inspect_err(log_failure)
    }

    /// Add a new book; its id must not be in use
    pub fn create_book(&self, book: Book) -> AppResult<Book> {
        let created = self.repository.books.create(book).inspect_err(log_failure)?;
        tracing::info!("Catalog: created book id={:?}", created.id);
        Ok(created)
    }

    /// Replace the book stored at `id`.
    /// The path id is authoritative: whatever id the body carries is
    /// overwritten so the stored record always matches its key.
    pub fn update_book(&self, id: &str, mut book: Book) -> AppResult<Book> {
        if book.id != id {
            tracing::debug!(
                "Catalog: update body id {:?} replaced by path id {:?}",
                book.id,
                id
            );
            book.id = id.to_string();
        }

        let updated = self
            .repository
            .books
            .update(id, book)
            .inspect_err(log_failure)?;
        tracing::info!("Catalog: updated book id={:?}", id);
        Ok(updated)
    }

    /// Remove a book, returning the deleted record
    pub fn delete_book(&self, id: &str) -> AppResult<Book> {
        let deleted = self.repository.books.delete(id).inspect_err(log_failure)?;
        tracing::info!("Catalog: deleted book id={:?}", id);
        Ok(deleted)
    }

    /// Number of books currently held
    pub fn count(&self) -> usize {
        self.repository.books.len()
    }
}

fn log_failure(err: &AppError) {
    tracing::debug!("Catalog: {}", err);
}
