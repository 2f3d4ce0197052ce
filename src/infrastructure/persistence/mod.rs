//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Rows are decoded into the `FromRow` types in `rows` and mapped onto
//! domain entities.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Members and borrowing history
//! - [`PgBookRepository`] - Catalogue and average ratings
//! - [`PgBorrowingRepository`] - Borrow/return records

pub mod pg_book_repository;
pub mod pg_borrowing_repository;
pub mod pg_user_repository;
mod rows;

pub use pg_book_repository::PgBookRepository;
pub use pg_borrowing_repository::PgBorrowingRepository;
pub use pg_user_repository::PgUserRepository;
