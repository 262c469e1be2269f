//! Application layer: command and query services for the Lending context.

pub mod borrow_book;
pub mod queries;
pub mod return_book;

pub use borrow_book::{BorrowBook, BorrowBookHandler};
pub use queries::{GetAvailableBooks, GetLoanDetails, GetUserLoans, LoanDetails};
pub use return_book::{ReturnBook, ReturnBookHandler};
