//! Events published by the Lending context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use biblios_core::{BookId, LoanId, UserId};
use biblios_events::Event;

/// Event: a user borrowed a book.
///
/// Published after the user, book and loan records are persisted. The Catalog
/// context reacts by bumping the book's popularity; Lending neither knows nor
/// cares who listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookBorrowed {
    pub book_id: BookId,
    pub user_id: UserId,
    pub loan_id: LoanId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LendingEvent {
    BookBorrowed(BookBorrowed),
}

impl Event for LendingEvent {
    fn event_type(&self) -> &'static str {
        match self {
            LendingEvent::BookBorrowed(_) => "lending.book.borrowed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            LendingEvent::BookBorrowed(e) => e.occurred_at,
        }
    }
}
