//! Books API
//!
//! A small REST JSON server keeping a catalog of books in memory.
//! Records live in a concurrent [`repository::BookStore`] that is built at
//! startup and handed to every handler through [`AppState`].

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::{BookStore, Repository};
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build the state for `config`, seeding the book store from
    /// `config.store.seed`
    pub fn new(config: AppConfig) -> Self {
        let (store, skipped) = BookStore::with_books(config.store.seed.iter().cloned());
        for id in skipped {
            tracing::warn!("Duplicate seed book id={:?} ignored", id);
        }
        tracing::info!("Book store seeded with {} book(s)", store.len());

        let services = Services::new(Repository::new(store));

        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
