//! Catalog bounded context.
//!
//! Owns the *descriptive* side of a book: title, ISBN, author, categories,
//! popularity. Knows nothing about circulation; when a librarian adds a book
//! it publishes [`events::BookAddedToCatalog`] and whoever cares (the Lending
//! context) reacts. This crate is pure domain + application logic: no IO, no
//! HTTP, no storage.

pub mod application;
pub mod author;
pub mod book;
pub mod category;
pub mod events;
pub mod isbn;
pub mod repository;

pub use author::Author;
pub use book::CatalogBook;
pub use category::Category;
pub use events::{BookAddedToCatalog, CatalogEvent};
pub use isbn::Isbn;
pub use repository::{AuthorRepository, CatalogBookRepository, CategoryRepository};
