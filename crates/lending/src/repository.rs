//! Storage ports for the Lending context.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use biblios_core::{BookId, DomainResult, LoanId, UserId};

use crate::book::LendingBook;
use crate::email::Email;
use crate::loan::Loan;
use crate::user::User;

/// Port: lending-side book storage.
pub trait LendingBookRepository: Send + Sync {
    fn save(&self, book: &LendingBook) -> DomainResult<()>;

    fn find_by_id(&self, id: BookId) -> DomainResult<Option<LendingBook>>;

    fn find_by_isbn(&self, isbn: &str) -> DomainResult<Option<LendingBook>>;

    /// Books currently on the shelf.
    fn find_available(&self) -> DomainResult<Vec<LendingBook>>;

    fn find_all(&self) -> DomainResult<Vec<LendingBook>>;
}

impl<R> LendingBookRepository for Arc<R>
where
    R: LendingBookRepository + ?Sized,
{
    fn save(&self, book: &LendingBook) -> DomainResult<()> {
        (**self).save(book)
    }

    fn find_by_id(&self, id: BookId) -> DomainResult<Option<LendingBook>> {
        (**self).find_by_id(id)
    }

    fn find_by_isbn(&self, isbn: &str) -> DomainResult<Option<LendingBook>> {
        (**self).find_by_isbn(isbn)
    }

    fn find_available(&self) -> DomainResult<Vec<LendingBook>> {
        (**self).find_available()
    }

    fn find_all(&self) -> DomainResult<Vec<LendingBook>> {
        (**self).find_all()
    }
}

/// Port: user storage.
pub trait UserRepository: Send + Sync {
    fn save(&self, user: &User) -> DomainResult<()>;

    fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    fn find_all(&self) -> DomainResult<Vec<User>>;
}

impl<R> UserRepository for Arc<R>
where
    R: UserRepository + ?Sized,
{
    fn save(&self, user: &User) -> DomainResult<()> {
        (**self).save(user)
    }

    fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        (**self).find_by_id(id)
    }

    fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        (**self).find_by_email(email)
    }

    fn find_all(&self) -> DomainResult<Vec<User>> {
        (**self).find_all()
    }
}

/// Port: loan storage.
pub trait LoanRepository: Send + Sync {
    fn save(&self, loan: &Loan) -> DomainResult<()>;

    fn find_by_id(&self, id: LoanId) -> DomainResult<Option<Loan>>;

    /// The user's loans that have not been returned yet.
    fn find_active_by_user(&self, user_id: UserId) -> DomainResult<Vec<Loan>>;

    fn find_by_book(&self, book_id: BookId) -> DomainResult<Vec<Loan>>;

    /// Active loans past their due date as of `now`.
    fn find_overdue(&self, now: DateTime<Utc>) -> DomainResult<Vec<Loan>>;

    fn find_all(&self) -> DomainResult<Vec<Loan>>;
}

impl<R> LoanRepository for Arc<R>
where
    R: LoanRepository + ?Sized,
{
    fn save(&self, loan: &Loan) -> DomainResult<()> {
        (**self).save(loan)
    }

    fn find_by_id(&self, id: LoanId) -> DomainResult<Option<Loan>> {
        (**self).find_by_id(id)
    }

    fn find_active_by_user(&self, user_id: UserId) -> DomainResult<Vec<Loan>> {
        (**self).find_active_by_user(user_id)
    }

    fn find_by_book(&self, book_id: BookId) -> DomainResult<Vec<Loan>> {
        (**self).find_by_book(book_id)
    }

    fn find_overdue(&self, now: DateTime<Utc>) -> DomainResult<Vec<Loan>> {
        (**self).find_overdue(now)
    }

    fn find_all(&self) -> DomainResult<Vec<Loan>> {
        (**self).find_all()
    }
}
