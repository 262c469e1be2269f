//! Storage ports for the Catalog context.
//!
//! The domain defines *what* it needs from storage; adapters (in-memory maps
//! for tests, a relational store in production) decide *how*. No storage
//! technology types leak into these signatures.

use std::sync::Arc;

use biblios_core::{AuthorId, BookId, CategoryId, DomainResult};

use crate::author::Author;
use crate::book::CatalogBook;
use crate::category::Category;
use crate::isbn::Isbn;

/// Port: catalog book storage.
pub trait CatalogBookRepository: Send + Sync {
    fn save(&self, book: &CatalogBook) -> DomainResult<()>;

    fn find_by_id(&self, id: BookId) -> DomainResult<Option<CatalogBook>>;

    fn find_by_isbn(&self, isbn: &Isbn) -> DomainResult<Option<CatalogBook>>;

    /// Case-insensitive title-fragment search.
    fn search_by_title(&self, query: &str) -> DomainResult<Vec<CatalogBook>>;

    /// Most-borrowed books first, at most `limit` of them.
    fn find_most_popular(&self, limit: usize) -> DomainResult<Vec<CatalogBook>>;

    fn find_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<CatalogBook>>;

    fn find_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<CatalogBook>>;
}

impl<R> CatalogBookRepository for Arc<R>
where
    R: CatalogBookRepository + ?Sized,
{
    fn save(&self, book: &CatalogBook) -> DomainResult<()> {
        (**self).save(book)
    }

    fn find_by_id(&self, id: BookId) -> DomainResult<Option<CatalogBook>> {
        (**self).find_by_id(id)
    }

    fn find_by_isbn(&self, isbn: &Isbn) -> DomainResult<Option<CatalogBook>> {
        (**self).find_by_isbn(isbn)
    }

    fn search_by_title(&self, query: &str) -> DomainResult<Vec<CatalogBook>> {
        (**self).search_by_title(query)
    }

    fn find_most_popular(&self, limit: usize) -> DomainResult<Vec<CatalogBook>> {
        (**self).find_most_popular(limit)
    }

    fn find_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<CatalogBook>> {
        (**self).find_by_category(category_id)
    }

    fn find_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<CatalogBook>> {
        (**self).find_by_author(author_id)
    }
}

/// Port: author storage.
pub trait AuthorRepository: Send + Sync {
    fn save(&self, author: &Author) -> DomainResult<()>;

    fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>>;

    fn find_all(&self) -> DomainResult<Vec<Author>>;
}

impl<R> AuthorRepository for Arc<R>
where
    R: AuthorRepository + ?Sized,
{
    fn save(&self, author: &Author) -> DomainResult<()> {
        (**self).save(author)
    }

    fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> DomainResult<Vec<Author>> {
        (**self).find_all()
    }
}

/// Port: category storage.
pub trait CategoryRepository: Send + Sync {
    fn save(&self, category: &Category) -> DomainResult<()>;

    fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;

    fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Category>>;

    /// All categories without a parent.
    fn find_roots(&self) -> DomainResult<Vec<Category>>;

    /// Every category, as a flat list.
    fn find_all(&self) -> DomainResult<Vec<Category>>;
}

impl<R> CategoryRepository for Arc<R>
where
    R: CategoryRepository + ?Sized,
{
    fn save(&self, category: &Category) -> DomainResult<()> {
        (**self).save(category)
    }

    fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        (**self).find_by_id(id)
    }

    fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Category>> {
        (**self).find_by_slug(slug)
    }

    fn find_roots(&self) -> DomainResult<Vec<Category>> {
        (**self).find_roots()
    }

    fn find_all(&self) -> DomainResult<Vec<Category>> {
        (**self).find_all()
    }
}
