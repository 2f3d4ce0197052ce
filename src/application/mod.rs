//! Application layer orchestrating the domain rules.
//!
//! Services depend on repository traits only, so they can be exercised with
//! mock repositories.
//!
//! - [`services::UserService`] - Members and their borrowing history
//! - [`services::BookService`] - Catalogue and average ratings
//! - [`services::BorrowingService`] - Borrow/return workflow

pub mod services;
