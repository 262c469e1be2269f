//! CatalogBook entity.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use biblios_core::{AuthorId, BookId, CategoryId, DomainError, DomainResult, Entity};

use crate::isbn::Isbn;

/// A book as the Catalog context sees it: metadata, description, categories,
/// popularity.
///
/// This is a *different* record than the Lending context's book: same physical
/// book, same id value, but a separate model with separate fields. Circulation
/// state (who has it, is it on the shelf) does not exist here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogBook {
    id: BookId,
    title: String,
    isbn: Isbn,
    author_id: AuthorId,
    description: Option<String>,
    published_at: DateTime<Utc>,
    popularity: u64,
    categories: BTreeSet<CategoryId>,
    created_at: DateTime<Utc>,
}

impl CatalogBook {
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        isbn: Isbn,
        author_id: AuthorId,
        published_at: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err(DomainError::validation("book title cannot be empty"));
        }

        Ok(Self {
            id,
            title,
            isbn,
            author_id,
            description: None,
            published_at,
            popularity: 0,
            categories: BTreeSet::new(),
            created_at,
        })
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    pub fn popularity(&self) -> u64 {
        self.popularity
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn categories(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.categories.iter().copied()
    }

    pub fn update_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Add the book to a category. Adding twice is a no-op (set semantics).
    pub fn add_category(&mut self, category_id: CategoryId) {
        self.categories.insert(category_id);
    }

    pub fn remove_category(&mut self, category_id: CategoryId) {
        self.categories.remove(&category_id);
    }

    pub fn has_category(&self, category_id: CategoryId) -> bool {
        self.categories.contains(&category_id)
    }

    /// Bump the popularity counter. Called when the book is borrowed.
    pub fn increase_popularity(&mut self) {
        self.popularity += 1;
    }

    pub fn change_author(&mut self, author_id: AuthorId) {
        self.author_id = author_id;
    }
}

impl Entity for CatalogBook {
    type Id = BookId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_book() -> CatalogBook {
        CatalogBook::new(
            BookId::new(),
            "The Dispossessed",
            Isbn::new("978-0061054884").unwrap(),
            AuthorId::new(),
            Utc::now(),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_blank_title() {
        let err = CatalogBook::new(
            BookId::new(),
            "   ",
            Isbn::new("978-0061054884").unwrap(),
            AuthorId::new(),
            Utc::now(),
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn adding_same_category_twice_keeps_one_entry() {
        let mut book = test_book();
        let category = CategoryId::new();

        book.add_category(category);
        book.add_category(category);

        assert_eq!(book.categories().count(), 1);
        assert!(book.has_category(category));
    }

    #[test]
    fn remove_category_clears_membership() {
        let mut book = test_book();
        let category = CategoryId::new();
        book.add_category(category);

        book.remove_category(category);
        assert!(!book.has_category(category));
    }

    #[test]
    fn popularity_starts_at_zero_and_increments() {
        let mut book = test_book();
        assert_eq!(book.popularity(), 0);

        book.increase_popularity();
        book.increase_popularity();
        assert_eq!(book.popularity(), 2);
    }
}
