//! Catalog-side reaction to Lending's "book borrowed" event.

use biblios_catalog::repository::CatalogBookRepository;
use biblios_core::DomainResult;
use biblios_events::EventHandler;
use biblios_lending::{BookBorrowed, LendingEvent};

use crate::event_bus::IntegrationEvent;

/// Bumps a catalog book's popularity each time it is borrowed.
///
/// This handler belongs to Catalog but reacts to a Lending event; Lending
/// does not know Catalog exists. More reactions (notifications, statistics)
/// could subscribe later without touching Lending.
///
/// A borrow event for a book the catalog does not know is logged and dropped:
/// the projection must tolerate the two contexts seeing events in different
/// orders.
pub struct IncreasePopularityOnBookBorrowed<R> {
    books: R,
}

impl<R> IncreasePopularityOnBookBorrowed<R>
where
    R: CatalogBookRepository,
{
    pub fn new(books: R) -> Self {
        Self { books }
    }

    fn apply(&self, event: &BookBorrowed) -> DomainResult<()> {
        let Some(mut book) = self.books.find_by_id(event.book_id)? else {
            tracing::warn!(book_id = %event.book_id, "borrow event for unknown catalog book");
            return Ok(());
        };

        book.increase_popularity();
        self.books.save(&book)?;

        tracing::info!(
            book_id = %event.book_id,
            user_id = %event.user_id,
            loan_id = %event.loan_id,
            popularity = book.popularity(),
            "book popularity updated",
        );
        Ok(())
    }
}

impl<R> EventHandler<IntegrationEvent> for IncreasePopularityOnBookBorrowed<R>
where
    R: CatalogBookRepository,
{
    fn handle(&self, event: &IntegrationEvent) -> DomainResult<()> {
        match event {
            IntegrationEvent::Lending(LendingEvent::BookBorrowed(event)) => self.apply(event),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use biblios_catalog::{CatalogBook, Isbn};
    use biblios_core::{AuthorId, BookId, LoanId, UserId};

    use crate::repositories::InMemoryCatalogBookRepository;

    use super::*;

    fn borrowed(book_id: BookId) -> IntegrationEvent {
        IntegrationEvent::Lending(LendingEvent::BookBorrowed(BookBorrowed {
            book_id,
            user_id: UserId::new(),
            loan_id: LoanId::new(),
            occurred_at: Utc::now(),
        }))
    }

    #[test]
    fn each_borrow_bumps_popularity() {
        let books = Arc::new(InMemoryCatalogBookRepository::new());
        let book = CatalogBook::new(
            BookId::new(),
            "Fiasco",
            Isbn::new("978-0156306300").unwrap(),
            AuthorId::new(),
            Utc::now(),
            Utc::now(),
        )
        .unwrap();
        books.save(&book).unwrap();

        let handler = IncreasePopularityOnBookBorrowed::new(books.clone());
        handler.handle(&borrowed(book.id())).unwrap();
        handler.handle(&borrowed(book.id())).unwrap();

        let book = books.find_by_id(book.id()).unwrap().unwrap();
        assert_eq!(book.popularity(), 2);
    }

    #[test]
    fn unknown_book_is_tolerated() {
        let books = Arc::new(InMemoryCatalogBookRepository::new());
        let handler = IncreasePopularityOnBookBorrowed::new(books.clone());

        handler.handle(&borrowed(BookId::new())).unwrap();
    }
}
