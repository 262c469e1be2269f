//! In-memory adapters for the Catalog context's storage ports.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use biblios_catalog::{Author, CatalogBook, Category, Isbn};
use biblios_catalog::repository::{AuthorRepository, CatalogBookRepository, CategoryRepository};
use biblios_core::{AuthorId, BookId, CategoryId, DomainResult};

#[derive(Debug, Default)]
pub struct InMemoryCatalogBookRepository {
    inner: RwLock<HashMap<BookId, CatalogBook>>,
}

impl InMemoryCatalogBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogBookRepository for InMemoryCatalogBookRepository {
    fn save(&self, book: &CatalogBook) -> DomainResult<()> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(book.id(), book.clone());
        Ok(())
    }

    fn find_by_id(&self, id: BookId) -> DomainResult<Option<CatalogBook>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(&id).cloned())
    }

    fn find_by_isbn(&self, isbn: &Isbn) -> DomainResult<Option<CatalogBook>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.values().find(|book| book.isbn() == isbn).cloned())
    }

    fn search_by_title(&self, query: &str) -> DomainResult<Vec<CatalogBook>> {
        let needle = query.to_lowercase();
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map
            .values()
            .filter(|book| book.title().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn find_most_popular(&self, limit: usize) -> DomainResult<Vec<CatalogBook>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut books: Vec<_> = map.values().cloned().collect();
        // Popularity descending, id as a deterministic tie-breaker.
        books.sort_by_key(|book| (core::cmp::Reverse(book.popularity()), book.id()));
        books.truncate(limit);
        Ok(books)
    }

    fn find_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<CatalogBook>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map
            .values()
            .filter(|book| book.has_category(category_id))
            .cloned()
            .collect())
    }

    fn find_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<CatalogBook>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map
            .values()
            .filter(|book| book.author_id() == author_id)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryAuthorRepository {
    inner: RwLock<HashMap<AuthorId, Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuthorRepository for InMemoryAuthorRepository {
    fn save(&self, author: &Author) -> DomainResult<()> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(author.id(), author.clone());
        Ok(())
    }

    fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(&id).cloned())
    }

    fn find_all(&self) -> DomainResult<Vec<Author>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.values().cloned().collect())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    inner: RwLock<HashMap<CategoryId, Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn save(&self, category: &Category) -> DomainResult<()> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(category.id(), category.clone());
        Ok(())
    }

    fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(&id).cloned())
    }

    fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Category>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.values().find(|category| category.slug() == slug).cloned())
    }

    fn find_roots(&self) -> DomainResult<Vec<Category>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.values().filter(|c| c.is_root()).cloned().collect())
    }

    fn find_all(&self) -> DomainResult<Vec<Category>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.values().cloned().collect())
    }
}
