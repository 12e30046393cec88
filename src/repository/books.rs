//! In-memory book store

use dashmap::{mapref::entry::Entry, DashMap};

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// Concurrency-safe container of books keyed by id.
///
/// Backed by a sharded-lock map: every operation holds a single shard lock
/// for its whole duration, so operations on one key are atomic with respect
/// to each other and operations on keys in different shards never contend.
#[derive(Debug, Default)]
pub struct BookStore {
    books: DashMap<String, Book>,
}

fn not_found() -> AppError {
    AppError::NotFound("Book not found".to_string())
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with `books`. On duplicate ids the first
    /// record wins; the skipped ids are returned alongside the store.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> (Self, Vec<String>) {
        let store = Self::new();
        let skipped = books
            .into_iter()
            .filter_map(|book| {
                let id = book.id.clone();
                store.create(book).err().map(|_| id)
            })
            .collect();
        (store, skipped)
    }

    /// Snapshot of every stored book, in no particular order
    pub fn list(&self) -> Vec<Book> {
        self.books.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn get(&self, id: &str) -> AppResult<Book> {
        self.books
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(not_found)
    }

    /// Insert `book` under its own id, failing if the id is taken
    pub fn create(&self, book: Book) -> AppResult<Book> {
        match self.books.entry(book.id.clone()) {
            Entry::Occupied(_) => Err(AppError::Conflict(format!(
                "Book ID {:?} already exists",
                book.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(book.clone());
                Ok(book)
            }
        }
    }

    /// Replace the whole record stored at `id`
    pub fn update(&self, id: &str, book: Book) -> AppResult<Book> {
        let mut entry = self.books.get_mut(id).ok_or_else(not_found)?;
        *entry = book.clone();
        Ok(book)
    }

    /// Remove and return the record stored at `id`
    pub fn delete(&self, id: &str) -> AppResult<Book> {
        self.books
            .remove(id)
            .map(|(_, book)| book)
            .ok_or_else(not_found)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
