//! Repository trait for borrowing records.

use crate::domain::entities::{Borrowing, BorrowingReturn, NewBorrowing};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the borrow/return workflow.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBorrowingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BorrowingRepository: Send + Sync {
    /// Finds the active (unreturned) borrowing of a book.
    ///
    /// When `user_id` is `None` any holder matches; otherwise the borrowing
    /// must also belong to that user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_active(
        &self,
        user_id: Option<i64>,
        book_id: i64,
    ) -> Result<Option<Borrowing>, AppError>;

    /// Opens a new borrowing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the book already has an active
    /// borrowing (enforced by the storage layer).
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_borrowing: NewBorrowing) -> Result<Borrowing, AppError>;

    /// Closes an active borrowing, setting its return date and score.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the borrowing does not exist or is
    /// already closed.
    async fn close(&self, id: i64, closing: BorrowingReturn) -> Result<Borrowing, AppError>;

    /// Counts borrowings that have not been returned yet.
    async fn count_active(&self) -> Result<i64, AppError>;
}
