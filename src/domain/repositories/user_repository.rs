//! Repository trait for user data access.

use crate::domain::entities::{BorrowedBook, NewUser, PaginationOptions, UpdateUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing library members.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by email address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Lists users ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, options: PaginationOptions) -> Result<Vec<User>, AppError>;

    /// Counts all users.
    async fn count(&self) -> Result<i64, AppError>;

    /// Replaces the editable fields of a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Conflict`] if the email is already in use.
    async fn update(&self, id: i64, update: UpdateUser) -> Result<User, AppError>;

    /// Deletes a user and, by cascade, their borrowings.
    ///
    /// Returns `Ok(false)` if no user has this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Lists every borrowing of a user with the borrowed book's name,
    /// oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_borrowed_books(&self, user_id: i64) -> Result<Vec<BorrowedBook>, AppError>;
}
