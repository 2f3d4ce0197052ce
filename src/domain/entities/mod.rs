//! Core domain entities representing the library data model.
//!
//! Entities are plain data structures; queries and business rules live in
//! the repositories and services.
//!
//! # Entity Types
//!
//! - [`User`] - A library member
//! - [`Book`] - A catalogue entry
//! - [`Borrowing`] - A loan of one book to one user, optionally rated on return
//!
//! Creation and update inputs use separate structs (`NewUser`, `UpdateUser`,
//! `NewBook`, `NewBorrowing`, `BorrowingReturn`).

pub mod book;
pub mod borrowing;
pub mod pagination;
pub mod user;

pub use book::{Book, NewBook, RatedBook};
pub use borrowing::{Borrowing, BorrowingReturn, NewBorrowing, Score};
pub use pagination::PaginationOptions;
pub use user::{BorrowedBook, NewUser, UpdateUser, User};
