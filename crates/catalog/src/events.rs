//! Events published by the Catalog context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use biblios_core::BookId;
use biblios_events::Event;

/// Event: a librarian added a book to the catalog.
///
/// The Lending context listens for this and creates its own circulation-facing
/// record keyed by the same `book_id`. The payload is a flat record of
/// primitives: `author_name` is a display string, not an `AuthorId`, so
/// consumers never need Catalog's internal model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAddedToCatalog {
    pub book_id: BookId,
    pub title: String,
    pub author_name: String,
    pub isbn: String,
    pub published_at: DateTime<Utc>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEvent {
    BookAdded(BookAddedToCatalog),
}

impl Event for CatalogEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CatalogEvent::BookAdded(_) => "catalog.book.added",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CatalogEvent::BookAdded(e) => e.occurred_at,
        }
    }
}
