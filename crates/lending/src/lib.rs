//! Lending bounded context.
//!
//! Owns the *circulation* side of a book: is this copy on the shelf, who has
//! it, which loans are overdue. Book records here come into existence
//! reactively, when the Catalog context announces a new book; this crate
//! never calls into Catalog and holds no reference to its types.

pub mod application;
pub mod book;
pub mod email;
pub mod events;
pub mod loan;
pub mod repository;
pub mod user;

pub use book::LendingBook;
pub use email::Email;
pub use events::{BookBorrowed, LendingEvent};
pub use loan::{FINE_PER_OVERDUE_DAY_CENTS, LOAN_PERIOD_DAYS, Loan};
pub use repository::{LendingBookRepository, LoanRepository, UserRepository};
pub use user::{MAX_ACTIVE_LOANS, User};
