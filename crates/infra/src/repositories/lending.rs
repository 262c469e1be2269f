//! In-memory adapters for the Lending context's storage ports.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};

use biblios_core::{BookId, DomainResult, LoanId, UserId};
use biblios_lending::repository::{LendingBookRepository, LoanRepository, UserRepository};
use biblios_lending::{Email, LendingBook, Loan, User};

#[derive(Debug, Default)]
pub struct InMemoryLendingBookRepository {
    inner: RwLock<HashMap<BookId, LendingBook>>,
}

impl InMemoryLendingBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LendingBookRepository for InMemoryLendingBookRepository {
    fn save(&self, book: &LendingBook) -> DomainResult<()> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(book.id(), book.clone());
        Ok(())
    }

    fn find_by_id(&self, id: BookId) -> DomainResult<Option<LendingBook>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(&id).cloned())
    }

    fn find_by_isbn(&self, isbn: &str) -> DomainResult<Option<LendingBook>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.values().find(|book| book.isbn() == isbn).cloned())
    }

    fn find_available(&self) -> DomainResult<Vec<LendingBook>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.values().filter(|b| b.is_available()).cloned().collect())
    }

    fn find_all(&self) -> DomainResult<Vec<LendingBook>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.values().cloned().collect())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn save(&self, user: &User) -> DomainResult<()> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(user.id(), user.clone());
        Ok(())
    }

    fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(&id).cloned())
    }

    fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.values().find(|user| user.email() == email).cloned())
    }

    fn find_all(&self) -> DomainResult<Vec<User>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.values().cloned().collect())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryLoanRepository {
    inner: RwLock<HashMap<LoanId, Loan>>,
}

impl InMemoryLoanRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoanRepository for InMemoryLoanRepository {
    fn save(&self, loan: &Loan) -> DomainResult<()> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(loan.id(), loan.clone());
        Ok(())
    }

    fn find_by_id(&self, id: LoanId) -> DomainResult<Option<Loan>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(&id).cloned())
    }

    fn find_active_by_user(&self, user_id: UserId) -> DomainResult<Vec<Loan>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map
            .values()
            .filter(|loan| loan.user_id() == user_id && loan.is_active())
            .cloned()
            .collect())
    }

    fn find_by_book(&self, book_id: BookId) -> DomainResult<Vec<Loan>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map
            .values()
            .filter(|loan| loan.book_id() == book_id)
            .cloned()
            .collect())
    }

    fn find_overdue(&self, now: DateTime<Utc>) -> DomainResult<Vec<Loan>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map
            .values()
            .filter(|loan| loan.is_overdue(now))
            .cloned()
            .collect())
    }

    fn find_all(&self) -> DomainResult<Vec<Loan>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.values().cloned().collect())
    }
}
