//! Repository trait definitions for the domain layer.
//!
//! These traits form the persistence gateway: services only talk to storage
//! through them. Implementations live in `crate::infrastructure::persistence`,
//! and mock implementations are generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Library members and their borrowing history
//! - [`BookRepository`] - Catalogue and ratings
//! - [`BorrowingRepository`] - Borrow/return records
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod book_repository;
pub mod borrowing_repository;
pub mod user_repository;

pub use book_repository::BookRepository;
pub use borrowing_repository::BorrowingRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use borrowing_repository::MockBorrowingRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
