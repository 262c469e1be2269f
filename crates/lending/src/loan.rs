//! Loan entity and the overdue-fine rule.

use chrono::{DateTime, Duration, Utc};

use biblios_core::{BookId, DomainError, DomainResult, Entity, LoanId, UserId};

/// Fixed loan period.
pub const LOAN_PERIOD_DAYS: i64 = 14;

/// Flat fine per whole overdue day, in the smallest currency unit (cents).
pub const FINE_PER_OVERDUE_DAY_CENTS: i64 = 50;

/// A single lending of a book to a user.
///
/// Lifecycle: created active, closed once (`returned_at` set), never reopened.
/// Everything time-dependent takes `now` as a parameter so the rules stay
/// deterministic and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    id: LoanId,
    user_id: UserId,
    book_id: BookId,
    borrowed_at: DateTime<Utc>,
    returned_at: Option<DateTime<Utc>>,
}

impl Loan {
    pub fn new(id: LoanId, user_id: UserId, book_id: BookId, borrowed_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            book_id,
            borrowed_at,
            returned_at: None,
        }
    }

    pub fn id(&self) -> LoanId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    pub fn borrowed_at(&self) -> DateTime<Utc> {
        self.borrowed_at
    }

    pub fn returned_at(&self) -> Option<DateTime<Utc>> {
        self.returned_at
    }

    /// A loan is active until it has been returned.
    pub fn is_active(&self) -> bool {
        self.returned_at.is_none()
    }

    pub fn due_date(&self) -> DateTime<Utc> {
        self.borrowed_at + Duration::days(LOAN_PERIOD_DAYS)
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.is_active() && now > self.due_date()
    }

    /// Fine owed at `now`, in cents.
    ///
    /// Zero on or before the due date; afterwards, the whole-day difference
    /// between `now` and the due date times the per-day rate. Must be computed
    /// *before* closing the loan; a returned loan owes nothing.
    pub fn calculate_fine(&self, now: DateTime<Utc>) -> i64 {
        if !self.is_overdue(now) {
            return 0;
        }

        let overdue_days = (now - self.due_date()).num_days();
        overdue_days * FINE_PER_OVERDUE_DAY_CENTS
    }

    /// Close the loan.
    pub fn close(&mut self, returned_at: DateTime<Utc>) -> DomainResult<()> {
        if !self.is_active() {
            return Err(DomainError::invariant("loan is already returned"));
        }

        self.returned_at = Some(returned_at);
        Ok(())
    }
}

impl Entity for Loan {
    type Id = LoanId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
