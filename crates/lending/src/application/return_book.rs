//! Command: return a borrowed book.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use biblios_core::{BookId, DomainError, DomainResult, UserId};

use crate::repository::{LendingBookRepository, LoanRepository, UserRepository};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub user_id: UserId,
    pub book_id: BookId,
    pub occurred_at: DateTime<Utc>,
}

/// Handler: find the user's active loan for the book, compute the fine, close
/// everything out.
///
/// The loan is found by a linear scan over the user's active loans, bounded
/// by the loan limit, so at most a handful. The fine is computed while the
/// loan is still active; a closed loan owes nothing. Returns the fine in
/// cents.
pub struct ReturnBookHandler<B, U, L> {
    books: B,
    users: U,
    loans: L,
}

impl<B, U, L> ReturnBookHandler<B, U, L>
where
    B: LendingBookRepository,
    U: UserRepository,
    L: LoanRepository,
{
    pub fn new(books: B, users: U, loans: L) -> Self {
        Self { books, users, loans }
    }

    pub fn handle(&self, command: ReturnBook) -> DomainResult<i64> {
        let mut user = self
            .users
            .find_by_id(command.user_id)?
            .ok_or_else(|| DomainError::not_found("user not found"))?;

        let mut book = self
            .books
            .find_by_id(command.book_id)?
            .ok_or_else(|| DomainError::not_found("book not found"))?;

        let mut loan = self
            .loans
            .find_active_by_user(command.user_id)?
            .into_iter()
            .find(|loan| loan.book_id() == command.book_id)
            .ok_or_else(|| DomainError::not_found("no active loan found for this book"))?;

        let fine = loan.calculate_fine(command.occurred_at);

        user.return_book()?;
        book.return_to_shelf()?;
        loan.close(command.occurred_at)?;

        self.users.save(&user)?;
        self.books.save(&book)?;
        self.loans.save(&loan)?;

        tracing::info!(
            user_id = %command.user_id,
            book_id = %command.book_id,
            loan_id = %loan.id(),
            fine_cents = fine,
            "book returned",
        );

        Ok(fine)
    }
}
