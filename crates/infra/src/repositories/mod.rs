//! In-memory repository adapters for tests and development.
//!
//! Each adapter is a `RwLock<HashMap>` behind the context's repository port.
//! Poisoned locks are recovered rather than propagated; an in-memory map has
//! no invariants a panicking writer could have broken halfway.

pub mod catalog;
pub mod lending;

pub use catalog::{InMemoryAuthorRepository, InMemoryCatalogBookRepository, InMemoryCategoryRepository};
pub use lending::{InMemoryLendingBookRepository, InMemoryLoanRepository, InMemoryUserRepository};
