//! Repository layer for book storage

pub mod books;

use std::sync::Arc;

pub use books::BookStore;

/// Main repository struct holding the shared stores
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<BookStore>,
}

impl Repository {
    /// Create a repository around an existing book store
    pub fn new(books: BookStore) -> Self {
        Self {
            books: Arc::new(books),
        }
    }
}
