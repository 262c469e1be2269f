//! Command: borrow a book.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use biblios_core::{BookId, DomainError, DomainResult, LoanId, UserId};
use biblios_events::EventPublisher;

use crate::events::{BookBorrowed, LendingEvent};
use crate::loan::Loan;
use crate::repository::{LendingBookRepository, LoanRepository, UserRepository};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowBook {
    pub user_id: UserId,
    pub book_id: BookId,
    pub occurred_at: DateTime<Utc>,
}

/// Handler: resolve user and book, enforce both borrow invariants, create the
/// loan, persist, publish.
///
/// Both rule checks run before any aggregate is touched, so a failure leaves
/// nothing half-mutated. All three records are persisted before the event goes
/// out. There is no transaction spanning the three saves and no lock between
/// load and save, so a concurrent request can observe stale availability. That
/// gap is inherited from the single-request execution model on purpose.
pub struct BorrowBookHandler<B, U, L, P> {
    books: B,
    users: U,
    loans: L,
    publisher: P,
}

impl<B, U, L, P> BorrowBookHandler<B, U, L, P>
where
    B: LendingBookRepository,
    U: UserRepository,
    L: LoanRepository,
    P: EventPublisher<LendingEvent>,
{
    pub fn new(books: B, users: U, loans: L, publisher: P) -> Self {
        Self {
            books,
            users,
            loans,
            publisher,
        }
    }

    pub fn handle(&self, command: BorrowBook) -> DomainResult<Loan> {
        let mut user = self
            .users
            .find_by_id(command.user_id)?
            .ok_or_else(|| DomainError::not_found("user not found"))?;

        let mut book = self
            .books
            .find_by_id(command.book_id)?
            .ok_or_else(|| DomainError::not_found("book not found"))?;

        // Both rules must hold before anything is mutated (all-or-nothing).
        if !user.can_borrow() {
            return Err(DomainError::invariant(
                "user has reached maximum loan limit",
            ));
        }
        if !book.is_available() {
            return Err(DomainError::invariant("book is not available"));
        }

        user.borrow_book()?;
        book.borrow()?;

        let loan = Loan::new(
            LoanId::new(),
            command.user_id,
            command.book_id,
            command.occurred_at,
        );

        self.users.save(&user)?;
        self.books.save(&book)?;
        self.loans.save(&loan)?;

        tracing::info!(
            user_id = %command.user_id,
            book_id = %command.book_id,
            loan_id = %loan.id(),
            "book borrowed",
        );

        self.publisher
            .publish(LendingEvent::BookBorrowed(BookBorrowed {
                book_id: command.book_id,
                user_id: command.user_id,
                loan_id: loan.id(),
                occurred_at: command.occurred_at,
            }));

        Ok(loan)
    }
}
