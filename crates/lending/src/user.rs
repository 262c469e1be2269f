//! User entity.

use chrono::{DateTime, Utc};

use biblios_core::{DomainError, DomainResult, Entity, UserId};

use crate::email::Email;

/// A user may hold at most this many active loans.
pub const MAX_ACTIVE_LOANS: u32 = 3;

/// A library user.
///
/// The active-loan counter is denormalized state: the borrow/return command
/// handlers keep it in step with the Loan records. The counter, not a query
/// over loans, is what enforces the limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: Email,
    registered_at: DateTime<Utc>,
    active_loan_count: u32,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: Email,
        registered_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("user name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            email,
            registered_at,
            active_loan_count: 0,
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn active_loan_count(&self) -> u32 {
        self.active_loan_count
    }

    pub fn can_borrow(&self) -> bool {
        self.active_loan_count < MAX_ACTIVE_LOANS
    }

    /// Record that the user took out a loan.
    pub fn borrow_book(&mut self) -> DomainResult<()> {
        if !self.can_borrow() {
            return Err(DomainError::invariant(format!(
                "user cannot borrow more than {MAX_ACTIVE_LOANS} books"
            )));
        }

        self.active_loan_count += 1;
        Ok(())
    }

    /// Record that the user returned a loan.
    pub fn return_book(&mut self) -> DomainResult<()> {
        if self.active_loan_count == 0 {
            return Err(DomainError::invariant("user has no active loans"));
        }

        self.active_loan_count -= 1;
        Ok(())
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
