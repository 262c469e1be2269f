//! Lending-side projection of Catalog's "book added" event.

use biblios_catalog::{BookAddedToCatalog, CatalogEvent};
use biblios_core::DomainResult;
use biblios_events::EventHandler;
use biblios_lending::LendingBook;
use biblios_lending::repository::LendingBookRepository;

use crate::event_bus::IntegrationEvent;

/// Creates the Lending context's book record when Catalog announces one.
///
/// Idempotent by check-before-insert keyed on `book_id`: if the record already
/// exists the event is acknowledged and dropped, so at-least-once redelivery
/// never produces a duplicate and never errors. A `LendingBook` exists exactly
/// when this event has been delivered at least once.
pub struct CreateLendingBookOnBookAdded<R> {
    books: R,
}

impl<R> CreateLendingBookOnBookAdded<R>
where
    R: LendingBookRepository,
{
    pub fn new(books: R) -> Self {
        Self { books }
    }

    fn apply(&self, event: &BookAddedToCatalog) -> DomainResult<()> {
        if self.books.find_by_id(event.book_id)?.is_some() {
            tracing::debug!(book_id = %event.book_id, "lending book already exists, skipping");
            return Ok(());
        }

        let book = LendingBook::new(
            event.book_id,
            event.title.clone(),
            event.author_name.clone(),
            event.isbn.clone(),
            event.published_at,
        );
        self.books.save(&book)?;

        tracing::info!(book_id = %event.book_id, "lending book created from catalog event");
        Ok(())
    }
}

impl<R> EventHandler<IntegrationEvent> for CreateLendingBookOnBookAdded<R>
where
    R: LendingBookRepository,
{
    fn handle(&self, event: &IntegrationEvent) -> DomainResult<()> {
        match event {
            IntegrationEvent::Catalog(CatalogEvent::BookAdded(event)) => self.apply(event),
            _ => Ok(()),
        }
    }
}
