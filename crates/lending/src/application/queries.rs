//! Query services for the Lending context.

use biblios_core::{BookBasicInfo, BookInfoProvider, DomainResult, UserId};

use crate::book::LendingBook;
use crate::loan::Loan;
use crate::repository::{LendingBookRepository, LoanRepository};

/// Query: which books are on the shelf right now.
pub struct GetAvailableBooks<B> {
    books: B,
}

impl<B> GetAvailableBooks<B>
where
    B: LendingBookRepository,
{
    pub fn new(books: B) -> Self {
        Self { books }
    }

    pub fn execute(&self) -> DomainResult<Vec<LendingBook>> {
        self.books.find_available()
    }
}

/// Query: a user's active loans.
pub struct GetUserLoans<L> {
    loans: L,
}

impl<L> GetUserLoans<L>
where
    L: LoanRepository,
{
    pub fn new(loans: L) -> Self {
        Self { loans }
    }

    pub fn execute(&self, user_id: UserId) -> DomainResult<Vec<Loan>> {
        self.loans.find_active_by_user(user_id)
    }
}

/// A loan paired with whatever book information the other side of the house
/// could supply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanDetails {
    pub loan: Loan,
    pub book: Option<BookBasicInfo>,
}

/// Query: a user's active loans, enriched with book metadata.
///
/// Lending owns the loans; the title/author come through the
/// [`BookInfoProvider`] contract from the shared kernel. Lending does not
/// know (or care) that the Catalog context is on the other end.
pub struct GetLoanDetails<L, P> {
    loans: L,
    book_info: P,
}

impl<L, P> GetLoanDetails<L, P>
where
    L: LoanRepository,
    P: BookInfoProvider,
{
    pub fn new(loans: L, book_info: P) -> Self {
        Self { loans, book_info }
    }

    pub fn execute(&self, user_id: UserId) -> DomainResult<Vec<LoanDetails>> {
        let loans = self.loans.find_active_by_user(user_id)?;

        loans
            .into_iter()
            .map(|loan| {
                let book = self.book_info.book_info(loan.book_id())?;
                Ok(LoanDetails { loan, book })
            })
            .collect()
    }
}
