//! LendingBook entity, the Lending context's view of a book.

use chrono::{DateTime, Utc};

use biblios_core::{BookId, DomainError, DomainResult, Entity};

/// A book as the Lending context sees it: a physical copy that is either on
/// the shelf or out with a reader.
///
/// This is a projection of Catalog's authoritative record: it is created when
/// the "book added" event arrives, keyed by the same [`BookId`], with the
/// descriptive fields flattened to plain strings. Only `is_available` is ever
/// mutated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LendingBook {
    id: BookId,
    title: String,
    author: String,
    isbn: String,
    published_at: DateTime<Utc>,
    is_available: bool,
}

impl LendingBook {
    /// A freshly registered book starts on the shelf.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            published_at,
            is_available: true,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    /// Take the copy off the shelf.
    pub fn borrow(&mut self) -> DomainResult<()> {
        if !self.is_available {
            return Err(DomainError::invariant(
                "book is not available for borrowing",
            ));
        }

        self.is_available = false;
        Ok(())
    }

    /// Put the copy back on the shelf.
    pub fn return_to_shelf(&mut self) -> DomainResult<()> {
        if self.is_available {
            return Err(DomainError::invariant("book is already available"));
        }

        self.is_available = true;
        Ok(())
    }
}

impl Entity for LendingBook {
    type Id = BookId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_book() -> LendingBook {
        LendingBook::new(
            BookId::new(),
            "Solaris",
            "Stanisław Lem",
            "978-0156027601",
            Utc::now(),
        )
    }

    #[test]
    fn new_book_is_available() {
        assert!(test_book().is_available());
    }

    #[test]
    fn borrow_flips_availability() {
        let mut book = test_book();
        book.borrow().unwrap();
        assert!(!book.is_available());
    }

    #[test]
    fn borrowing_unavailable_book_fails_without_mutation() {
        let mut book = test_book();
        book.borrow().unwrap();

        let err = book.borrow().unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert!(!book.is_available());
    }

    #[test]
    fn returning_available_book_fails() {
        let mut book = test_book();
        let err = book.return_to_shelf().unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn borrow_then_return_round_trips_availability() {
        let mut book = test_book();
        book.borrow().unwrap();
        book.return_to_shelf().unwrap();
        assert!(book.is_available());
    }
}
