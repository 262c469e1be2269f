//! Cross-context event handlers.
//!
//! These are the reactions that keep the two contexts' independently-owned
//! "book" records referentially aligned without a shared schema or foreign
//! key. Each handler belongs conceptually to the *consuming* context but is
//! wired up here, the one place that may see both sides.

pub mod lending_books;
pub mod popularity;

pub use lending_books::CreateLendingBookOnBookAdded;
pub use popularity::IncreasePopularityOnBookBorrowed;
