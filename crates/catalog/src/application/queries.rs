//! Query services for the Catalog context.

use biblios_core::{AuthorId, DomainResult};

use crate::book::CatalogBook;
use crate::category::Category;
use crate::isbn::Isbn;
use crate::repository::{CatalogBookRepository, CategoryRepository};

/// Query: search the catalog.
pub struct SearchCatalogBooks<B, C> {
    books: B,
    categories: C,
}

impl<B, C> SearchCatalogBooks<B, C>
where
    B: CatalogBookRepository,
    C: CategoryRepository,
{
    pub fn new(books: B, categories: C) -> Self {
        Self { books, categories }
    }

    /// Books whose title contains the given fragment.
    pub fn by_title(&self, query: &str) -> DomainResult<Vec<CatalogBook>> {
        self.books.search_by_title(query)
    }

    /// Exact lookup by ISBN (formatting-insensitive).
    pub fn by_isbn(&self, isbn: &Isbn) -> DomainResult<Option<CatalogBook>> {
        self.books.find_by_isbn(isbn)
    }

    /// The most-borrowed books, best first.
    pub fn most_popular(&self, limit: usize) -> DomainResult<Vec<CatalogBook>> {
        self.books.find_most_popular(limit)
    }

    pub fn by_author(&self, author_id: AuthorId) -> DomainResult<Vec<CatalogBook>> {
        self.books.find_by_author(author_id)
    }

    /// Books in the category identified by `slug`. Unknown slug → empty list.
    pub fn by_category(&self, slug: &str) -> DomainResult<Vec<CatalogBook>> {
        let Some(category) = self.categories.find_by_slug(slug)? else {
            return Ok(Vec::new());
        };

        self.books.find_by_category(category.id())
    }
}

/// Query: list and navigate categories.
pub struct GetCategories<C> {
    categories: C,
}

impl<C> GetCategories<C>
where
    C: CategoryRepository,
{
    pub fn new(categories: C) -> Self {
        Self { categories }
    }

    pub fn roots(&self) -> DomainResult<Vec<Category>> {
        self.categories.find_roots()
    }

    pub fn all(&self) -> DomainResult<Vec<Category>> {
        self.categories.find_all()
    }

    pub fn by_slug(&self, slug: &str) -> DomainResult<Option<Category>> {
        self.categories.find_by_slug(slug)
    }

    /// Full path of a category: "Programming / Rust / Web".
    ///
    /// Walks parent links through the repository. A dangling parent id or a
    /// cycle in the stored tree ends the walk rather than erroring; the
    /// partial path is still useful.
    pub fn path(&self, slug: &str) -> DomainResult<Option<String>> {
        let Some(category) = self.categories.find_by_slug(slug)? else {
            return Ok(None);
        };

        let mut seen = std::collections::HashSet::from([category.id()]);
        let mut segments = vec![category.name().to_string()];
        let mut cursor = category.parent_id();

        while let Some(parent_id) = cursor {
            if !seen.insert(parent_id) {
                break;
            }
            match self.categories.find_by_id(parent_id)? {
                Some(parent) => {
                    segments.push(parent.name().to_string());
                    cursor = parent.parent_id();
                }
                None => break,
            }
        }

        segments.reverse();
        Ok(Some(segments.join(" / ")))
    }
}
