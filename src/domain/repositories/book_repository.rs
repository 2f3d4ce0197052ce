//! Repository trait for book data access.

use crate::domain::entities::{Book, NewBook, PaginationOptions};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the book catalogue.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Creates a new book.
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError>;

    /// Finds a book by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError>;

    /// Lists books ordered by name.
    async fn list(&self, options: PaginationOptions) -> Result<Vec<Book>, AppError>;

    /// Counts all books.
    async fn count(&self) -> Result<i64, AppError>;

    /// Renames a book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no book has this id.
    async fn update(&self, id: i64, update: NewBook) -> Result<Book, AppError>;

    /// Deletes a book and, by cascade, its borrowings.
    ///
    /// Returns `Ok(false)` if no book has this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Average of all non-null scores given to the book.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(avg))` if the book was rated at least once
    /// - `Ok(None)` otherwise
    async fn average_score(&self, book_id: i64) -> Result<Option<f64>, AppError>;
}
