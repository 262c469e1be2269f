//! `biblios-core`: shared kernel for the library domain.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns)
//! shared by the Catalog and Lending bounded contexts: the error model,
//! strongly-typed identifiers, and the one cross-context read contract.

pub mod book_info;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use book_info::{BookBasicInfo, BookInfoProvider};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AuthorId, BookId, CategoryId, LoanId, UserId};
pub use value_object::ValueObject;
