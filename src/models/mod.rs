//! Data models for the books API

pub mod book;

pub use book::Book;
