//! Application layer: command and query services for the Catalog context.

pub mod add_book;
pub mod queries;

pub use add_book::{AddBookToCatalog, AddBookToCatalogHandler};
pub use queries::{GetCategories, SearchCatalogBooks};
