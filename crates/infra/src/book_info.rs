//! Catalog-backed adapter for the shared `BookInfoProvider` contract.

use biblios_catalog::repository::{AuthorRepository, CatalogBookRepository};
use biblios_core::{BookBasicInfo, BookId, BookInfoProvider, DomainResult};

/// Serves basic book data out of the Catalog context.
///
/// Consumers (Lending's loan-details query) only see the contract from the
/// shared kernel; they cannot tell Catalog is behind it. An author record
/// missing for a known book degrades to an empty display name rather than
/// failing the whole lookup.
pub struct CatalogBookInfoProvider<B, A> {
    books: B,
    authors: A,
}

impl<B, A> CatalogBookInfoProvider<B, A>
where
    B: CatalogBookRepository,
    A: AuthorRepository,
{
    pub fn new(books: B, authors: A) -> Self {
        Self { books, authors }
    }
}

impl<B, A> BookInfoProvider for CatalogBookInfoProvider<B, A>
where
    B: CatalogBookRepository,
    A: AuthorRepository,
{
    fn book_info(&self, book_id: BookId) -> DomainResult<Option<BookBasicInfo>> {
        let Some(book) = self.books.find_by_id(book_id)? else {
            return Ok(None);
        };

        let author = self
            .authors
            .find_by_id(book.author_id())?
            .map(|author| author.full_name())
            .unwrap_or_default();

        Ok(Some(BookBasicInfo {
            id: book.id(),
            title: book.title().to_string(),
            author,
            isbn: book.isbn().value().to_string(),
        }))
    }
}
